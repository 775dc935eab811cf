use crate::domain::model::BadgeRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub markdown: Vec<String>,
    pub unmatched: Vec<String>,
}

fn find_badge<'a>(catalog: &'a [BadgeRecord], requested: &str) -> Option<&'a str> {
    let wanted = requested.to_lowercase();
    catalog
        .iter()
        .find(|record| record.name().is_some_and(|name| name.to_lowercase() == wanted))
        .and_then(BadgeRecord::badge)
}

/// Markdown for each requested name, in request order.
///
/// Names match case-insensitively against the `Name` column and the first
/// catalog record wins, even when it has no `Badge` cell. Unknown names are
/// left out.
pub fn select_badges(catalog: &[BadgeRecord], requested: &[String]) -> Vec<String> {
    select_with_report(catalog, requested).markdown
}

pub fn select_with_report(catalog: &[BadgeRecord], requested: &[String]) -> Selection {
    let mut selection = Selection::default();
    for name in requested {
        match find_badge(catalog, name) {
            Some(markdown) => selection.markdown.push(markdown.to_string()),
            None => selection.unmatched.push(name.clone()),
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, badge: &str) -> BadgeRecord {
        vec![("Name", name), ("Badge", badge)].into_iter().collect()
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_output_follows_request_order() {
        let catalog = vec![record("Python", "py"), record("Rust", "rs"), record("Go", "go")];
        let selected = select_badges(&catalog, &names(&["Go", "Python"]));
        assert_eq!(selected, vec!["go", "py"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let catalog = vec![record("GitHub Actions", "gha")];
        let selected = select_badges(&catalog, &names(&["github actions", "GITHUB ACTIONS"]));
        assert_eq!(selected, vec!["gha", "gha"]);
    }

    #[test]
    fn test_first_record_wins() {
        let catalog = vec![record("Docker", "first"), record("docker", "second")];
        assert_eq!(select_badges(&catalog, &names(&["Docker"])), vec!["first"]);
    }

    #[test]
    fn test_unmatched_names_are_reported() {
        let catalog = vec![record("Python", "py")];
        let selection = select_with_report(&catalog, &names(&["Cobol", "python", "Fortran"]));
        assert_eq!(selection.markdown, vec!["py"]);
        assert_eq!(selection.unmatched, names(&["Cobol", "Fortran"]));
    }

    #[test]
    fn test_only_name_column_is_matched() {
        let catalog = vec![record("Python", "Rust")];
        assert!(select_badges(&catalog, &names(&["Rust"])).is_empty());
    }

    #[test]
    fn test_first_name_match_without_badge_yields_nothing() {
        let partial: BadgeRecord = vec![("Name", "Vim")].into_iter().collect();
        let catalog = vec![partial, record("vim", "vim-badge"), record("Git", "git-badge")];
        let selection = select_with_report(&catalog, &names(&["Vim", "git"]));
        assert_eq!(selection.markdown, vec!["git-badge"]);
        assert_eq!(selection.unmatched, names(&["Vim"]));
    }
}
