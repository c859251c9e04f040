use serde_derive::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fmt::{self, Debug, Display, Formatter},
    iter::FromIterator,
};

/// Field names which are never written to the logs.
const SECRET_MARKERS: &[&str] = &["pass", "secret", "token", "key"];

fn looks_secret(field: &str) -> bool {
    let field = field.to_ascii_lowercase();
    SECRET_MARKERS.iter().any(|marker| field.contains(marker))
}

/// The fields submitted by the login form.
///
/// These are forwarded to the auth API exactly as they were entered, nothing
/// is validated or renamed locally.
#[derive(Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(BTreeMap<String, String>);

impl Credentials {
    pub fn new() -> Self { Credentials::default() }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Credentials {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Credentials(
            iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        )
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(k, v)| {
                let v = if looks_secret(k) { "<redacted>" } else { v.as_str() };
                (k, v)
            }))
            .finish()
    }
}

/// Whatever the signup form submitted, as an ordered set of named fields.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignupPayload(BTreeMap<String, String>);

impl SignupPayload {
    pub fn new() -> Self { SignupPayload::default() }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'_ str, &'_ str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SignupPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SignupPayload(
            iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        )
    }
}

impl Display for SignupPayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_secret_fields() {
        let creds = Credentials::new()
            .with_field("id", "a")
            .with_field("secret", "b")
            .with_field("Password", "hunter2");

        let got = format!("{:?}", creds);

        assert_eq!(
            got,
            r#"{"Password": "<redacted>", "id": "a", "secret": "<redacted>"}"#
        );
    }

    #[test]
    fn credentials_are_forwarded_verbatim() {
        let creds = Credentials::new().with_field("id", "a").with_field("secret", "b");

        let got = serde_json::to_value(&creds).unwrap();

        assert_eq!(got, serde_json::json!({ "id": "a", "secret": "b" }));
        assert_eq!(creds.get("secret"), Some("b"));
    }

    #[test]
    fn signup_payload_displays_its_fields() {
        let payload: SignupPayload =
            vec![("id", "x"), ("email", "x@example.com")]
                .into_iter()
                .collect();

        assert_eq!(payload.get("id"), Some("x"));
        assert_eq!(
            payload.to_string(),
            r#"{"email": "x@example.com", "id": "x"}"#
        );
    }
}
