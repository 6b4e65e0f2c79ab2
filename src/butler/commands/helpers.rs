use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ButlerError, Result};
use crate::fields::ValidationError;
use crate::pages::Paginator;
use crate::prompt::Prompt;
use std::fmt::Display;

/// Asks until the answer parses or is left blank. Rejected answers are shown and re-asked.
pub fn ask_optional<P, T, F>(prompt: &mut P, question: &str, parse: F) -> Result<Option<T>>
where
    P: Prompt,
    F: Fn(&str) -> std::result::Result<T, ValidationError>,
{
    loop {
        let answer = prompt.ask(question)?;
        if answer.trim().is_empty() {
            return Ok(None);
        }
        match parse(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => prompt.show(&e.to_string()),
        }
    }
}

/// Asks for a non-negative whole number.
pub fn ask_index<P: Prompt>(prompt: &mut P, question: &str) -> Result<usize> {
    let answer = prompt.ask(question)?;
    answer
        .trim()
        .parse()
        .map_err(|_| ButlerError::InvalidSelection(format!("\"{}\" is not a number", answer.trim())))
}

/// Asks for a whole number that may be negative.
pub fn ask_number<P: Prompt>(prompt: &mut P, question: &str) -> Result<i64> {
    let answer = prompt.ask(question)?;
    answer
        .trim()
        .parse()
        .map_err(|_| ButlerError::InvalidSelection(format!("\"{}\" is not a number", answer.trim())))
}

/// Renders each item on its own line(s), in order.
pub fn render_all<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lists `items` a page at a time. Asks for the page size, shows every page but the
/// last through the prompt with a pause after each, and returns the last one.
pub fn show_paged<P: Prompt, T: Display>(
    prompt: &mut P,
    items: &[T],
    noun: &str,
    ending: &str,
) -> Result<CmdResult> {
    let answer = ask_number(prompt, &format!("How many {} to show? ", noun))?;
    if answer < 1 {
        return Err(ButlerError::InvalidSelection(
            "input cannot be less than 1".to_string(),
        ));
    }
    let page_size = usize::try_from(answer).unwrap_or(usize::MAX);

    if page_size >= items.len() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Printing all {}:\n\n{}\n{}",
            noun,
            render_all(items),
            ending
        ))));
    }

    let paginator = Paginator::new(items, page_size)?;
    let last = paginator.page_count();
    let mut result = CmdResult::default();
    for (number, page) in paginator.pages().enumerate() {
        let heading = if number == 0 {
            format!("Printing {} {}", page_size, noun)
        } else {
            format!("Printing next {} {}", page_size, noun)
        };
        if number + 1 == last {
            result.add_message(CmdMessage::info(format!("{}\n\n{}\n{}", heading, page, ending)));
        } else {
            prompt.show(&format!("{}\n\n{}", heading, page));
            prompt.ask("Press Enter to continue: ")?;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Phone;
    use crate::prompt::fixtures::ScriptedPrompt;

    #[test]
    fn ask_optional_retries_until_valid_or_blank() {
        let mut prompt = ScriptedPrompt::new(["bad", "+38(099)1234567"]);
        let phone = ask_optional(&mut prompt, "Phone? ", Phone::parse).unwrap();
        assert_eq!(phone.unwrap().as_str(), "+38(099)1234567");
        assert_eq!(prompt.shown.len(), 1);
        assert!(prompt.shown[0].starts_with("Wrong phone format"));

        let mut prompt = ScriptedPrompt::new(["bad", ""]);
        assert!(ask_optional(&mut prompt, "Phone? ", Phone::parse).unwrap().is_none());
    }

    #[test]
    fn numbers_must_parse() {
        let mut prompt = ScriptedPrompt::new([" 3 ", "-2", "x", "-2"]);
        assert_eq!(ask_index(&mut prompt, "?").unwrap(), 3);
        assert_eq!(ask_number(&mut prompt, "?").unwrap(), -2);
        assert!(matches!(ask_index(&mut prompt, "?"), Err(ButlerError::InvalidSelection(_))));
        assert!(matches!(ask_index(&mut prompt, "?"), Err(ButlerError::InvalidSelection(_))));
    }

    #[test]
    fn show_paged_pauses_between_pages() {
        let items = ["a", "b", "c", "d", "e"];
        let mut prompt = ScriptedPrompt::new(["2", "", ""]);
        let result = show_paged(&mut prompt, &items, "records", "End of records").unwrap();

        assert_eq!(prompt.shown, vec!["Printing 2 records\n\na\nb", "Printing next 2 records\n\nc\nd"]);
        assert_eq!(prompt.remaining(), 0);
        assert_eq!(result.text(), "Printing next 2 records\n\ne\nEnd of records");
    }

    #[test]
    fn show_paged_prints_everything_when_page_is_large() {
        let items = ["a", "b"];
        let mut prompt = ScriptedPrompt::new(["5"]);
        let result = show_paged(&mut prompt, &items, "records", "End of records").unwrap();
        assert!(prompt.shown.is_empty());
        assert_eq!(result.text(), "Printing all records:\n\na\nb\nEnd of records");
    }

    #[test]
    fn show_paged_rejects_page_sizes_below_one() {
        let items = ["a"];
        for answer in ["0", "-1", "many"] {
            let mut prompt = ScriptedPrompt::new([answer]);
            assert!(matches!(
                show_paged(&mut prompt, &items, "records", "End"),
                Err(ButlerError::InvalidSelection(_))
            ));
        }
    }
}
