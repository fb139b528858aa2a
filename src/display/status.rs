//! One-line status bar shown under the preview.

use crate::motion::Region;

/// What the status bar reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub region: Option<Region>,
    pub last_key: Option<&'static str>,
    pub presses: u64,
}

impl Status {
    /// Format: ` region:4 | pressed:space | presses:12 | q to quit `
    pub fn format(&self, max_width: u16) -> String {
        let region = self
            .region
            .map_or_else(|| "-".to_string(), |r| r.to_string());
        let text = format!(
            " region:{} | pressed:{} | presses:{} | q to quit ",
            region,
            self.last_key.unwrap_or("-"),
            self.presses
        );
        text.chars().take(max_width as usize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_idle() {
        let status = Status {
            region: None,
            last_key: None,
            presses: 0,
        };
        assert_eq!(
            status.format(80),
            " region:- | pressed:- | presses:0 | q to quit "
        );
    }

    #[test]
    fn test_format_active_and_truncated() {
        let status = Status {
            region: Region::new(4),
            last_key: Some("space"),
            presses: 12,
        };
        assert_eq!(
            status.format(80),
            " region:4 | pressed:space | presses:12 | q to quit "
        );
        assert_eq!(status.format(9), " region:4");
    }
}
