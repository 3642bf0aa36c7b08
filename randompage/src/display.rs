use std::mem;

use console::style;
use wiki_random::Page;

pub const WIDTH: usize = 70;

/// Title in green, then the extract wrapped to [`WIDTH`] columns.
pub fn render(page: &Page) -> String {
    format!(
        "{}\n{}\n",
        style(page.title.as_str()).green(),
        wrap(&page.extract, WIDTH)
    )
}

/// Greedy word wrap. Words longer than a line are split.
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut len = 0;

    for mut word in text.split_whitespace() {
        loop {
            let wlen = word.chars().count();
            let needed = if len == 0 { wlen } else { len + 1 + wlen };
            if needed <= width {
                if len > 0 {
                    line.push(' ');
                }
                line.push_str(word);
                len = needed;
                break;
            }
            if len > 0 {
                lines.push(mem::take(&mut line));
                len = 0;
                continue;
            }
            let split = word.char_indices().nth(width).map_or(word.len(), |(i, _)| i);
            lines.push(word[..split].to_owned());
            word = &word[split..];
        }
    }
    if len > 0 {
        lines.push(line);
    }
    lines.join("\n")
}
