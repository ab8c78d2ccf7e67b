//! Prompt and error message rendering

use super::Prompter;
use crate::constants::menu;

/// Render the text shown before reading an answer.
///
/// Plain prompts look like `Message (a/b) [a]: `. Menus list each choice
/// with its 1-based index under a separator line, followed by the menu
/// prompt and the default item.
pub fn render_message(prompter: &Prompter) -> String {
    if prompter.is_menu {
        let mut msg = format!("{}\n{}\n", prompter.message, menu::SEPARATOR);
        for (i, choice) in prompter.choices.iter().enumerate() {
            msg.push_str(&format!(" [{}] {}\n", i + 1, choice));
        }
        if prompter.menu_prompt.is_empty() {
            msg.push_str(menu::DEFAULT_PROMPT);
        } else {
            msg.push_str(&prompter.menu_prompt);
        }
        if prompter.default_menu_item != 0 {
            msg.push_str(&format!(" [{}]", prompter.default_menu_item));
        }
        msg + ": "
    } else {
        let mut msg = prompter.message.clone();
        if !prompter.choices.is_empty() {
            msg.push_str(&format!(" ({})", prompter.choices.join("/")));
        }
        if !prompter.default.is_empty() {
            msg.push_str(&format!(" [{}]", prompter.default));
        }
        msg + ": "
    }
}

/// Render the hint printed after a rejected answer.
pub fn render_error(prompter: &Prompter) -> String {
    if let Some(pattern) = &prompter.pattern {
        return format!("# Answer should match /{}/", pattern.as_str());
    }
    if prompter.is_menu {
        return String::new();
    }
    match prompter.choices.split_last() {
        None => String::new(),
        Some((only, [])) => format!("# Enter `{only}`"),
        Some((last, rest)) => {
            let head = rest.iter().map(|c| format!("`{c}`")).collect::<Vec<_>>().join(", ");
            format!("# Enter {head} or `{last}`")
        }
    }
}
