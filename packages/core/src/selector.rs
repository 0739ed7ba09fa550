//! Host and user selection
//!
//! Selection is driven through the [`Prompter`] trait so the terminal UI stays
//! in the CLI crate. Long lists are narrowed with a search query first.

use tracing::{debug, info};

use crate::config::HostRecord;
use crate::error::LauncherError;

/// Label of the free-text entry appended to the user list
pub const OTHER_LABEL: &str = "Other";

/// Interactive prompt operations used by the launcher
///
/// Implementations return [`LauncherError::PromptAborted`] when input is
/// interrupted or closed.
pub trait Prompter {
    /// Single choice from `items`, returning the chosen index
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, LauncherError>;

    /// Free text line
    fn input(&self, prompt: &str, allow_empty: bool) -> Result<String, LauncherError>;

    /// Masked text line
    fn password(&self, prompt: &str) -> Result<String, LauncherError>;

    /// Show a recoverable error before prompting again
    fn show_error(&self, message: &str);
}

/// Search predicate: case-insensitive substring match ignoring whitespace
pub fn matches_search(candidate: &str, query: &str) -> bool {
    normalize(candidate).contains(&normalize(query))
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Indices of `keys` matching `query`, in original order
pub fn filter_indices<'a, I>(keys: I, query: &str) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    keys.into_iter()
        .enumerate()
        .filter(|(_, key)| matches_search(key, query))
        .map(|(index, _)| index)
        .collect()
}

/// Result of narrowing a list with a search query
enum Narrowed {
    Matches(Vec<usize>),
    NoMatch(String),
}

/// Presents host and user choices through a [`Prompter`]
pub struct Selector<'a, P: Prompter> {
    prompter: &'a P,
    page_size: usize,
}

impl<'a, P: Prompter> Selector<'a, P> {
    pub fn new(prompter: &'a P, page_size: usize) -> Self {
        Self {
            prompter,
            page_size,
        }
    }

    /// Choose one host; searching matches the host name
    pub fn select_host<'h>(&self, hosts: &'h [HostRecord]) -> Result<&'h HostRecord, LauncherError> {
        if hosts.is_empty() {
            return Err(LauncherError::ConfigurationShape(
                "no hosts configured".to_string(),
            ));
        }

        let candidates = loop {
            match self.narrow("Search hosts", hosts.iter().map(|h| h.name.as_str()))? {
                Narrowed::Matches(indices) => break indices,
                Narrowed::NoMatch(query) => {
                    self.prompter
                        .show_error(&format!("No host matches '{query}'"));
                }
            }
        };

        let labels: Vec<String> = candidates
            .iter()
            .map(|&index| hosts[index].display_label())
            .collect();
        let choice = self.prompter.select("Host", &labels)?;
        let host = candidates
            .get(choice)
            .map(|&index| &hosts[index])
            .ok_or_else(|| LauncherError::PromptAborted(format!("invalid host choice {choice}")))?;

        info!(name = %host.name, kind = %host.kind, "Host selected");
        debug!(address = %host.address, "Host address");
        Ok(host)
    }

    /// Choose a login identity or type a new one
    ///
    /// A search with no matches, or the `Other` entry, returns the typed text verbatim.
    pub fn select_user_or_add(&self, identities: &[String]) -> Result<String, LauncherError> {
        let candidates =
            match self.narrow("Search users", identities.iter().map(String::as_str))? {
                Narrowed::Matches(indices) => indices,
                Narrowed::NoMatch(query) => {
                    info!(user = %query, "Using unlisted user");
                    return Ok(query);
                }
            };

        let mut labels: Vec<String> = candidates
            .iter()
            .map(|&index| identities[index].clone())
            .collect();
        labels.push(OTHER_LABEL.to_string());

        let choice = self.prompter.select("User", &labels)?;
        if choice == candidates.len() {
            let typed = self.prompter.input(OTHER_LABEL, false)?;
            info!(user = %typed, "Using unlisted user");
            return Ok(typed);
        }

        let identity = candidates
            .get(choice)
            .map(|&index| identities[index].clone())
            .ok_or_else(|| LauncherError::PromptAborted(format!("invalid user choice {choice}")))?;
        info!(user = %identity, "User selected");
        Ok(identity)
    }

    fn narrow<'k, I>(&self, prompt: &str, keys: I) -> Result<Narrowed, LauncherError>
    where
        I: IntoIterator<Item = &'k str>,
    {
        let keys: Vec<&str> = keys.into_iter().collect();
        if keys.len() <= self.page_size {
            return Ok(Narrowed::Matches((0..keys.len()).collect()));
        }

        let query = self.prompter.input(prompt, true)?;
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(Narrowed::Matches((0..keys.len()).collect()));
        }

        let matches = filter_indices(keys, trimmed);
        debug!(query = %trimmed, matches = matches.len(), "Search applied");
        if matches.is_empty() {
            Ok(Narrowed::NoMatch(query))
        } else {
            Ok(Narrowed::Matches(matches))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Reply, ScriptedPrompter};

    fn hosts(count: usize) -> Vec<HostRecord> {
        (0..count)
            .map(|i| HostRecord::new(format!("Box {i}"), format!("10.0.0.{i}")))
            .collect()
    }

    #[test]
    fn search_ignores_case_and_whitespace() {
        assert!(matches_search("Prod Web 01", "prodweb"));
        assert!(matches_search("prodweb01", "PROD WEB"));
        assert!(matches_search("Anything", ""));
        assert!(!matches_search("Staging", "prod"));
    }

    #[test]
    fn filter_keeps_original_order() {
        let keys = ["Web A", "db", "web b"];
        assert_eq!(filter_indices(keys, "WEB"), vec![0, 2]);
    }

    #[test]
    fn selecting_index_returns_that_host() {
        let hosts = hosts(3);
        for i in 0..hosts.len() {
            let prompter = ScriptedPrompter::new([Reply::Select(i)]);
            let selector = Selector::new(&prompter, 4);
            let host = selector.select_host(&hosts).unwrap();
            assert_eq!(host.address, format!("10.0.0.{i}"));
        }
    }

    #[test]
    fn empty_host_list_is_shape_error() {
        let prompter = ScriptedPrompter::new([]);
        let selector = Selector::new(&prompter, 4);
        let err = selector.select_host(&[]).unwrap_err();
        assert!(matches!(err, LauncherError::ConfigurationShape(_)));
    }

    #[test]
    fn aborted_host_prompt_is_fatal() {
        let prompter = ScriptedPrompter::new([Reply::Abort]);
        let selector = Selector::new(&prompter, 4);
        let err = selector.select_host(&hosts(2)).unwrap_err();
        assert!(matches!(err, LauncherError::PromptAborted(_)));
    }

    #[test]
    fn long_host_list_is_searched_by_name() {
        let mut hosts = hosts(5);
        hosts.push(HostRecord::new("Prod DB", "10.1.0.1"));
        let prompter =
            ScriptedPrompter::new([Reply::Input("prod db".into()), Reply::Select(0)]);
        let selector = Selector::new(&prompter, 4);

        let host = selector.select_host(&hosts).unwrap();
        assert_eq!(host.address, "10.1.0.1");
        assert_eq!(prompter.selections(), vec![vec!["Prod DB [rdp] (10.1.0.1)".to_string()]]);
    }

    #[test]
    fn host_search_matches_name_not_address() {
        let hosts = hosts(6);
        let prompter = ScriptedPrompter::new([
            Reply::Input("10.0.0".into()),
            Reply::Input("box5".into()),
            Reply::Select(0),
        ]);
        let selector = Selector::new(&prompter, 4);

        let host = selector.select_host(&hosts).unwrap();
        assert_eq!(host.address, "10.0.0.5");
        assert_eq!(prompter.errors(), vec!["No host matches '10.0.0'".to_string()]);
    }

    #[test]
    fn blank_search_keeps_every_host() {
        let hosts = hosts(6);
        let prompter = ScriptedPrompter::new([Reply::Input("  ".into()), Reply::Select(5)]);
        let selector = Selector::new(&prompter, 4);

        let host = selector.select_host(&hosts).unwrap();
        assert_eq!(host.address, "10.0.0.5");
    }

    #[test]
    fn user_list_ends_with_other() {
        let identities = vec![r"CORP\alice".to_string()];
        let prompter = ScriptedPrompter::new([Reply::Select(0)]);
        let selector = Selector::new(&prompter, 4);

        assert_eq!(selector.select_user_or_add(&identities).unwrap(), r"CORP\alice");
        assert_eq!(
            prompter.selections(),
            vec![vec![r"CORP\alice".to_string(), OTHER_LABEL.to_string()]]
        );
    }

    #[test]
    fn other_returns_typed_identity_verbatim() {
        let identities = vec![r"CORP\alice".to_string()];
        let prompter = ScriptedPrompter::new([
            Reply::Select(1),
            Reply::Input(r"LAB\ Bob ".into()),
        ]);
        let selector = Selector::new(&prompter, 4);

        assert_eq!(selector.select_user_or_add(&identities).unwrap(), r"LAB\ Bob ");
    }

    #[test]
    fn other_works_with_no_configured_users() {
        let prompter =
            ScriptedPrompter::new([Reply::Select(0), Reply::Input(r"LAB\bob".into())]);
        let selector = Selector::new(&prompter, 4);

        assert_eq!(selector.select_user_or_add(&[]).unwrap(), r"LAB\bob");
    }

    #[test]
    fn unmatched_user_search_is_returned_verbatim() {
        let identities: Vec<String> = (0..5).map(|i| format!(r"CORP\user{i}")).collect();
        let prompter = ScriptedPrompter::new([Reply::Input(r"LAB\carol".into())]);
        let selector = Selector::new(&prompter, 4);

        assert_eq!(selector.select_user_or_add(&identities).unwrap(), r"LAB\carol");
        assert!(prompter.selections().is_empty());
    }

    #[test]
    fn unmatched_user_search_keeps_surrounding_spaces() {
        let identities: Vec<String> = (0..5).map(|i| format!(r"CORP\user{i}")).collect();
        let prompter = ScriptedPrompter::new([Reply::Input(r" LAB\carol ".into())]);
        let selector = Selector::new(&prompter, 4);

        assert_eq!(selector.select_user_or_add(&identities).unwrap(), r" LAB\carol ");
    }

    #[test]
    fn padded_user_search_still_filters() {
        let identities: Vec<String> = (0..5).map(|i| format!(r"CORP\user{i}")).collect();
        let prompter = ScriptedPrompter::new([Reply::Input("  user2 ".into()), Reply::Select(0)]);
        let selector = Selector::new(&prompter, 4);

        assert_eq!(selector.select_user_or_add(&identities).unwrap(), r"CORP\user2");
        assert_eq!(
            prompter.selections(),
            vec![vec![r"CORP\user2".to_string(), OTHER_LABEL.to_string()]]
        );
    }

    #[test]
    fn user_search_narrows_list() {
        let identities: Vec<String> = (0..5).map(|i| format!(r"CORP\user{i}")).collect();
        let prompter = ScriptedPrompter::new([Reply::Input("USER3".into()), Reply::Select(0)]);
        let selector = Selector::new(&prompter, 4);

        assert_eq!(selector.select_user_or_add(&identities).unwrap(), r"CORP\user3");
    }

    #[test]
    fn aborted_other_input_is_fatal() {
        let prompter = ScriptedPrompter::new([Reply::Select(0), Reply::Abort]);
        let selector = Selector::new(&prompter, 4);
        let err = selector.select_user_or_add(&[]).unwrap_err();
        assert!(matches!(err, LauncherError::PromptAborted(_)));
    }
}
