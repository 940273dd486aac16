#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line and window counters collected during one conversion run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionStats {
    pub lines_read: u64,
    /// Lines that did not start with a digit
    pub comment_lines: u64,
    /// Lines that started with a digit but failed to parse
    pub malformed_lines: u64,
    /// GPS records dropped for having too few satellites
    pub filtered_records: u64,
    /// Valid records handed to the averager
    pub records: u64,
    /// Lines written in unaveraged form
    pub raw_lines: u64,
    /// Averaged windows written
    pub windows: u64,
    /// Sum of member counts across all averaged windows
    pub averaged_records: u64,
}

impl ConversionStats {
    /// Lines written as `# ` passthrough comments
    pub fn passthrough_lines(&self) -> u64 {
        self.comment_lines + self.malformed_lines + self.filtered_records
    }
}
