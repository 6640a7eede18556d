/*!
 * Utility functions for dirprint
 */

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Share of `total` taken by `lines`, in percent. Zero when `total` is zero.
pub fn percentage(lines: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        lines as f64 / total as f64 * 100.0
    }
}

/// Tree annotation for a non-root entry, e.g. ` (2 lines, 40.0%)`
pub fn format_line_annotation(lines: usize, total: usize) -> String {
    format!(" ({} lines, {:.1}%)", lines, percentage(lines, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_line_annotation() {
        assert_eq!(format_line_annotation(2, 5), " (2 lines, 40.0%)");
        assert_eq!(format_line_annotation(1, 3), " (1 lines, 33.3%)");
        assert_eq!(format_line_annotation(0, 0), " (0 lines, 0.0%)");
    }
}
