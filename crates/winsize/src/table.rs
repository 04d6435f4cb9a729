use winsize_core::window::WindowInfo;

/// Print a formatted table of windows
pub fn print_windows_table(windows: &[WindowInfo]) {
    // Calculate column widths
    let handle_width = windows
        .iter()
        .map(|w| w.handle.to_string().len())
        .max()
        .unwrap_or(6)
        .clamp(6, 18);
    let title_width = windows
        .iter()
        .map(|w| w.title.chars().count())
        .max()
        .unwrap_or(5)
        .clamp(5, 50);
    let size_width = 11; // "1920x1080" format
    let pos_width = 13; // "x:1234 y:1234" format

    // Header
    println!(
        "┌{}┬{}┬{}┬{}┐",
        "─".repeat(handle_width + 2),
        "─".repeat(title_width + 2),
        "─".repeat(size_width + 2),
        "─".repeat(pos_width + 2),
    );
    println!(
        "│ {:<handle_width$} │ {:<title_width$} │ {:<size_width$} │ {:<pos_width$} │",
        "Handle",
        "Title",
        "Size",
        "Position",
        handle_width = handle_width,
        title_width = title_width,
        size_width = size_width,
        pos_width = pos_width,
    );
    println!(
        "├{}┼{}┼{}┼{}┤",
        "─".repeat(handle_width + 2),
        "─".repeat(title_width + 2),
        "─".repeat(size_width + 2),
        "─".repeat(pos_width + 2),
    );

    // Rows
    for window in windows {
        let (size, pos) = match window.rect {
            Some(rect) => (
                rect.size().to_string(),
                format!("x:{} y:{}", rect.left, rect.top),
            ),
            None => ("?".to_string(), "?".to_string()),
        };

        println!(
            "│ {:<handle_width$} │ {:<title_width$} │ {:<size_width$} │ {:<pos_width$} │",
            truncate(&window.handle.to_string(), handle_width),
            truncate(&window.title, title_width),
            truncate(&size, size_width),
            truncate(&pos, pos_width),
            handle_width = handle_width,
            title_width = title_width,
            size_width = size_width,
            pos_width = pos_width,
        );
    }

    // Footer
    println!(
        "└{}┴{}┴{}┴{}┘",
        "─".repeat(handle_width + 2),
        "─".repeat(title_width + 2),
        "─".repeat(size_width + 2),
        "─".repeat(pos_width + 2),
    );

    println!("\nTotal: {} window(s)", windows.len());
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Counts characters, not bytes, so multi-byte titles are cut safely.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
