use std::cmp::Ordering;

use crate::prelude::Contact;

/// Favorites first, then name ascending.
pub fn canonical_order(a: &Contact, b: &Contact) -> Ordering {
    b.favorite
        .cmp(&a.favorite)
        .then_with(|| a.name.cmp(&b.name))
}

pub fn sort_canonical(contacts: &mut [&Contact]) {
    contacts.sort_by(|a, b| canonical_order(a, b));
}

/// Case-insensitive substring match on name and email, literal match on phone number.
/// `query` must already be lower-cased.
pub fn matches_query(contact: &Contact, query: &str) -> bool {
    contact.name.to_lowercase().contains(query)
        || contact.phone_number.contains(query)
        || contact.email.to_lowercase().contains(query)
}

pub fn search<'a, I>(contacts: I, query: &str) -> Vec<&'a Contact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let query = query.to_lowercase();

    let mut results: Vec<&Contact> = contacts
        .into_iter()
        .filter(|contact| matches_query(contact, &query))
        .collect();

    sort_canonical(&mut results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, phone: &str, email: &str, favorite: bool) -> Contact {
        Contact::new(name.to_string(), phone.to_string(), email.to_string()).with_favorite(favorite)
    }

    #[test]
    fn favorites_sort_before_names() {
        let zed = contact("Zed", "1", "z@x.com", true);
        let amy = contact("Amy", "2", "a@x.com", false);
        let bob = contact("Bob", "3", "b@x.com", true);

        let mut list = vec![&amy, &zed, &bob];
        sort_canonical(&mut list);

        let names: Vec<&str> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Zed", "Amy"]);
    }

    #[test]
    fn name_order_is_case_sensitive_bytewise() {
        let lower = contact("ann", "1", "", false);
        let upper = contact("Bo", "2", "", false);

        let mut list = vec![&lower, &upper];
        sort_canonical(&mut list);

        assert_eq!(list[0].name, "Bo");
    }

    #[test]
    fn matches_on_each_field() {
        let ann = contact("Ann Lee", "555-1111", "Ann@Example.com", false);

        assert!(matches_query(&ann, "lee"));
        assert!(matches_query(&ann, "555-11"));
        assert!(matches_query(&ann, "example.com"));
        assert!(!matches_query(&ann, "bob"));
    }

    #[test]
    fn search_lowercases_query_and_orders_results() {
        let ann = contact("Ann", "555-1111", "ann@x.com", false);
        let bo = contact("Bo", "555-2222", "bo@x.com", true);

        let results = search([&ann, &bo], "X.COM");
        let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bo", "Ann"]);

        let results = search([&ann, &bo], "555-22");
        assert_eq!(results, vec![&bo]);

        assert!(search([&ann, &bo], "nobody").is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        let ann = contact("Ann", "555-1111", "ann@x.com", false);
        let bo = contact("Bo", "555-2222", "bo@x.com", false);

        assert_eq!(search([&ann, &bo], "").len(), 2);
    }
}
