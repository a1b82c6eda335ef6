//! Per-item and aggregate outcomes of a batch run.

use crate::compose::ComposeError;


/// Name of the archive entry for the meme at given (0-based) pairing index.
///
/// Entries are numbered 1-based: `meme_1.jpg`, `meme_2.jpg`, ...
pub fn output_name(index: usize) -> String {
    format!("meme_{}.jpg", index + 1)
}


/// Outcome of processing a single image/caption pair.
#[derive(Debug)]
pub struct ItemOutcome {
    /// 0-based index of the pair within the batch.
    pub index: usize,
    /// Identifier of the source image (e.g. its file name).
    pub source_name: String,
    /// Name the meme has (or would have had) in the output archive.
    pub output_name: String,
    /// Whether the item made it into the archive, or why it didn't.
    pub result: Result<(), ComposeError>,
}

impl ItemOutcome {
    /// Whether the item was composed & archived successfully.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Human-readable description of the failure, if any.
    pub fn error_detail(&self) -> Option<String> {
        self.result.as_ref().err().map(|e| e.to_string())
    }
}


/// Aggregate outcome of one batch run.
///
/// Outcomes are kept in input index order, regardless of success.
/// The success/failure counts are always derived from them,
/// never stored separately.
#[derive(Debug, Default)]
pub struct BatchSummary {
    outcomes: Vec<ItemOutcome>,
    /// How many trailing images were dropped for lack of a caption.
    pub dropped_images: usize,
    /// How many trailing captions were dropped for lack of an image.
    pub dropped_captions: usize,
}

impl BatchSummary {
    pub(super) fn new(dropped_images: usize, dropped_captions: usize) -> Self {
        BatchSummary{outcomes: Vec::new(), dropped_images, dropped_captions}
    }

    pub(super) fn record(&mut self, outcome: ItemOutcome) {
        debug_assert_eq!(self.outcomes.len(), outcome.index);
        self.outcomes.push(outcome);
    }
}

impl BatchSummary {
    /// Per-item outcomes, in input index order.
    #[inline]
    pub fn outcomes(&self) -> &[ItemOutcome] {
        &self.outcomes
    }

    /// How many pairs were attempted (the pairing length).
    #[inline]
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// How many memes were successfully composed & archived.
    pub fn successes(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// The outcomes of items that failed.
    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}


#[cfg(test)]
mod tests {
    use super::output_name;

    #[test]
    fn output_names_are_one_based() {
        assert_eq!("meme_1.jpg", output_name(0));
        assert_eq!("meme_10.jpg", output_name(9));
    }
}
