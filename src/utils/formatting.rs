//! Formatting utilities used for CLI outputs.

/// Truncate to `max` characters, appending an ellipsis when shortened.
/// Used for reflection previews in list views.
pub fn preview(s: &str, max: usize) -> String {
    let flat = s.replace('\n', " ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Render a progress bar like `[██████----] 60%`.
pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent as usize * width) / 100;
    let empty = width.saturating_sub(filled);
    format!("[{}{}] {}%", "█".repeat(filled), "-".repeat(empty), percent)
}
