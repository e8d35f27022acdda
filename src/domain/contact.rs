use serde::{Deserialize, Serialize};

pub const DEFAULT_GROUP: &str = "General";

/// A single entry of the contact book.
///
/// Field order is the on-disk column order: name, phone number, email, group, favorite.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub group: String,

    #[serde(with = "favorite_flag")]
    pub favorite: bool,
}

impl Contact {
    pub fn new(name: String, phone_number: String, email: String) -> Self {
        Contact {
            name,
            phone_number,
            email,
            group: DEFAULT_GROUP.to_string(),
            favorite: false,
        }
    }

    pub fn with_group(mut self, group: String) -> Self {
        self.group = group;
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }
}

/// Encodes the favorite flag as the literal text `True` / `False`.
/// Decoding accepts only the exact text `True`; anything else reads as false.
pub mod favorite_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub const TRUE: &str = "True";
    pub const FALSE: &str = "False";

    pub fn encode(flag: bool) -> &'static str {
        if flag { TRUE } else { FALSE }
    }

    pub fn decode(text: &str) -> bool {
        text == TRUE
    }

    pub fn serialize<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(encode(*flag))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(decode(&text))
    }
}

/// A single field change: leave the field alone, or overwrite it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    Keep,
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn apply(self, field: &mut T) {
        if let FieldUpdate::Set(value) = self {
            *field = value;
        }
    }
}

impl FieldUpdate<String> {
    // Blank input means "no change"; there is no way to clear a field from text input
    pub fn from_input(input: &str) -> Self {
        if input.is_empty() {
            FieldUpdate::Keep
        } else {
            FieldUpdate::Set(input.to_string())
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Keep,
        }
    }
}

/// Changes to apply to an existing contact. The name is the key and cannot change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub phone_number: FieldUpdate<String>,
    pub email: FieldUpdate<String>,
    pub group: FieldUpdate<String>,
    pub favorite: FieldUpdate<bool>,
}

impl ContactUpdate {
    /// Builds an update from raw text fields, where an empty string leaves the field unchanged.
    pub fn from_input(
        phone_number: &str,
        email: &str,
        group: &str,
        favorite: Option<bool>,
    ) -> Self {
        ContactUpdate {
            phone_number: FieldUpdate::from_input(phone_number),
            email: FieldUpdate::from_input(email),
            group: FieldUpdate::from_input(group),
            favorite: favorite.into(),
        }
    }

    pub fn apply_to(self, contact: &mut Contact) {
        self.phone_number.apply(&mut contact.phone_number);
        self.email.apply(&mut contact.email);
        self.group.apply(&mut contact.group);
        self.favorite.apply(&mut contact.favorite);
    }
}
