//! Snippet registry: example identifier → source snippet + prop documentation
//!
//! Built once when a page is constructed and never mutated afterwards.
//! Entries keep insertion order, which is also the order the chip row in the
//! docs panel displays them.

use serde::Serialize;

/// Text shown in place of a snippet when the identifier has none
pub const NO_EXAMPLE: &str = "// No code example available";

/// One documented property of a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropDoc {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub description: &'static str,
}

impl PropDoc {
    pub const fn new(name: &'static str, ty: &'static str, description: &'static str) -> Self {
        Self {
            name,
            ty,
            description,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: &'static str,
    snippet: Option<&'static str>,
    props: &'static [PropDoc],
}

/// Result of resolving an identifier against a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The identifier has a snippet
    Found(&'a str),
    /// No snippet for this identifier (unknown key or docs-only entry)
    Missing,
}

impl<'a> Lookup<'a> {
    /// Snippet text, or the placeholder for `Missing`
    pub fn text(self) -> &'a str {
        match self {
            Lookup::Found(text) => text,
            Lookup::Missing => NO_EXAMPLE,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Read-only registry of snippets and prop docs for one page
#[derive(Debug, Clone, Default)]
pub struct SnippetRegistry {
    entries: Vec<Entry>,
}

impl SnippetRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Snippet for `id`, if one exists
    pub fn get(&self, id: &str) -> Option<&'static str> {
        self.entry(id).and_then(|e| e.snippet)
    }

    pub fn lookup(&self, id: &str) -> Lookup<'static> {
        match self.get(id) {
            Some(text) => Lookup::Found(text),
            None => Lookup::Missing,
        }
    }

    /// Snippet for `id`, falling back to [`NO_EXAMPLE`]
    pub fn snippet_or_placeholder(&self, id: &str) -> &'static str {
        self.lookup(id).text()
    }

    /// Prop docs for `id` (empty for unknown identifiers)
    pub fn props(&self, id: &str) -> &'static [PropDoc] {
        self.entry(id).map(|e| e.props).unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entry(id).is_some()
    }

    /// Identifiers in display order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Position of `id` in display order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder used by page definitions
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<Entry>,
}

impl RegistryBuilder {
    /// Add an identifier with a snippet and its prop docs
    ///
    /// Re-adding an identifier replaces the earlier entry in place.
    pub fn entry(self, id: &'static str, snippet: &'static str, props: &'static [PropDoc]) -> Self {
        self.push(Entry {
            id,
            snippet: Some(snippet),
            props,
        })
    }

    /// Add an identifier that is documented but has no snippet
    pub fn props_only(self, id: &'static str, props: &'static [PropDoc]) -> Self {
        self.push(Entry {
            id,
            snippet: None,
            props,
        })
    }

    fn push(mut self, entry: Entry) -> Self {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    pub fn build(self) -> SnippetRegistry {
        SnippetRegistry {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BADGE_PROPS: &[PropDoc] = &[PropDoc::new("variant", "string", "Visual style")];

    fn registry() -> SnippetRegistry {
        SnippetRegistry::builder()
            .entry("badges", "<Badge>New</Badge>", BADGE_PROPS)
            .entry("progress", "<Progress value={60} />", &[])
            .props_only("calendar", BADGE_PROPS)
            .build()
    }

    #[test]
    fn get_returns_snippet_for_known_id() {
        let reg = registry();
        assert_eq!(reg.get("badges"), Some("<Badge>New</Badge>"));
        assert!(reg.lookup("progress").is_found());
    }

    #[test]
    fn missing_id_falls_back_to_placeholder() {
        let reg = registry();
        assert_eq!(reg.get("carousel"), None);
        assert_eq!(reg.lookup("carousel"), Lookup::Missing);
        assert_eq!(reg.snippet_or_placeholder("carousel"), NO_EXAMPLE);
        assert!(reg.props("carousel").is_empty());
    }

    #[test]
    fn docs_only_entry_has_props_but_no_snippet() {
        let reg = registry();
        assert!(reg.contains("calendar"));
        assert_eq!(reg.props("calendar").len(), 1);
        assert_eq!(reg.snippet_or_placeholder("calendar"), NO_EXAMPLE);
    }

    #[test]
    fn ids_keep_insertion_order() {
        let reg = registry();
        let ids: Vec<_> = reg.ids().collect();
        assert_eq!(ids, vec!["badges", "progress", "calendar"]);
        assert_eq!(reg.position("calendar"), Some(2));
        assert_eq!(reg.id_at(1), Some("progress"));
    }

    #[test]
    fn duplicate_entry_replaces_in_place() {
        let reg = SnippetRegistry::builder()
            .entry("a", "first", &[])
            .entry("b", "b", &[])
            .entry("a", "second", &[])
            .build();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("a"), Some("second"));
        assert_eq!(reg.id_at(0), Some("a"));
    }

    #[test]
    fn prop_doc_serializes_type_field() {
        let json = serde_json::to_string(&BADGE_PROPS[0]).unwrap();
        assert_eq!(
            json,
            r#"{"name":"variant","type":"string","description":"Visual style"}"#
        );
    }
}
