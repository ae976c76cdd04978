//! Email address grammar
//!
//! Both the form controller and the submission handler validate addresses
//! against the same fixed grammar: a local part of alphanumerics and
//! `._%+-`, an `@`, a domain of alphanumerics and `.-`, a dot, and a
//! top-level segment of two or more letters.

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-')
}

/// Check an address against the fixed grammar.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }

    // The domain must carry at least one dot-separated label before a
    // 2+ letter top-level segment.
    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    if labels.is_empty() || !labels.chars().all(is_domain_char) {
        return false;
    }

    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
