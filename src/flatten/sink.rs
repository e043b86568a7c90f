use crate::flatten::error::FlattenResult;
use crate::flatten::types::FlatPair;

/// Receiver of flattened rows - the channel a host forwards records through.
///
/// The flattener hands each successfully traversed document over in one
/// `emit_batch` call, so a sink never sees part of a failed document.
pub trait PairSink {
    fn emit(&mut self, pair: FlatPair) -> FlattenResult<()>;

    /// Accept every row of one document.
    ///
    /// The default emits row by row. Sinks whose `emit` can fail partway
    /// should override this so a batch is released whole or not at all.
    fn emit_batch(&mut self, pairs: Vec<FlatPair>) -> FlattenResult<()> {
        for pair in pairs {
            self.emit(pair)?;
        }
        Ok(())
    }
}

impl PairSink for Vec<FlatPair> {
    fn emit(&mut self, pair: FlatPair) -> FlattenResult<()> {
        self.push(pair);
        Ok(())
    }

    fn emit_batch(&mut self, pairs: Vec<FlatPair>) -> FlattenResult<()> {
        self.extend(pairs);
        Ok(())
    }
}

impl<S: PairSink + ?Sized> PairSink for &mut S {
    fn emit(&mut self, pair: FlatPair) -> FlattenResult<()> {
        (**self).emit(pair)
    }

    fn emit_batch(&mut self, pairs: Vec<FlatPair>) -> FlattenResult<()> {
        (**self).emit_batch(pairs)
    }
}

/// Adapts a closure into a sink
pub struct FnSink<F>(pub F);

impl<F> PairSink for FnSink<F>
where
    F: FnMut(FlatPair) -> FlattenResult<()>,
{
    fn emit(&mut self, pair: FlatPair) -> FlattenResult<()> {
        (self.0)(pair)
    }
}
