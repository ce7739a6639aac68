/// A field selection with every fragment (named or inline) already expanded
/// into its enclosing selection set.
///
/// Produced by [`resolve_fragments()`](crate::operation::resolve_fragments).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) name: String,
    pub(crate) selection_set: Option<Vec<FieldSelection>>,
}
impl FieldSelection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            name: name.into(),
            selection_set: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_selection_set(mut self, selection_set: Vec<FieldSelection>) -> Self {
        self.selection_set = Some(selection_set);
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The name of the selected field as declared in the schema.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /**
     * If an alias was specified for this selection, return the alias.
     * Otherwise return the name of the field.
     */
    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> Option<&[FieldSelection]> {
        self.selection_set.as_deref()
    }
}
