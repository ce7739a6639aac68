use crate::ast;
use crate::operation::FieldSelection;
use indexmap::IndexMap;
use std::collections::HashMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, FragmentResolutionError>;

/// Upper bound on the number of one-level expansion rounds performed on a
/// single selection set before it is considered malformed.
pub const MAX_EXPANSION_ROUNDS: usize = 64;

/// Upper bound on the depth of nested field selections produced by
/// [`resolve_fragments()`].
pub const MAX_SELECTION_DEPTH: usize = 128;

/// Upper bound on the number of selections that fragment expansion may
/// produce across a whole call to [`resolve_fragments()`].
pub const MAX_EXPANDED_SELECTIONS: usize = 100_000;

/// Fragment definitions of a document, keyed by fragment name.
pub type FragmentMap<'doc> = HashMap<&'doc str, &'doc ast::operation::FragmentDefinition>;

/// Index every fragment definition in `document` by name.
///
/// If a name is defined more than once the last definition wins.
pub fn fragments_by_name(document: &ast::operation::Document) -> FragmentMap<'_> {
    document.definitions
        .iter()
        .filter_map(|def| match def {
            ast::operation::Definition::Fragment(frag_def) =>
                Some((frag_def.name.as_str(), frag_def)),
            ast::operation::Definition::Operation(_) => None,
        })
        .collect()
}

/// Flatten `selections` into a tree of [`FieldSelection`]s that contains no
/// fragment spreads or inline fragments.
///
/// Inline fragments are replaced by their selections, and named fragment
/// spreads by the selections of the fragment they name. Spreads of fragments
/// missing from `fragments` contribute nothing. Expansion repeats until only
/// fields remain (fragments may spread other fragments), and every remaining
/// field's own selection set is resolved the same way.
///
/// Fields that end up sharing both a response key and a field name within the
/// same selection set are merged into the first of them, with their
/// sub-selections combined. Fields that share only a response key (an alias
/// used for different fields under different type conditions) are kept
/// apart.
///
/// Type conditions and `@skip`/`@include` directives are not evaluated.
///
/// Cyclic or exponentially self-spreading fragments are reported as a
/// [`FragmentResolutionError`] once [`MAX_EXPANSION_ROUNDS`],
/// [`MAX_SELECTION_DEPTH`] or [`MAX_EXPANDED_SELECTIONS`] is exceeded.
pub fn resolve_fragments(
    selections: &[ast::operation::Selection],
    fragments: &FragmentMap<'_>,
) -> Result<Vec<FieldSelection>> {
    let mut budget = ExpansionBudget {
        remaining: MAX_EXPANDED_SELECTIONS,
    };
    resolve_at_depth(selections.iter().collect(), fragments, 0, &mut budget)
}

struct ExpansionBudget {
    remaining: usize,
}
impl ExpansionBudget {
    fn spend(&mut self, count: usize) -> Result<()> {
        match self.remaining.checked_sub(count) {
            Some(remaining) => {
                self.remaining = remaining;
                Ok(())
            },
            None => Err(FragmentResolutionError::MaxExpandedSelectionsExceeded {
                max_selections: MAX_EXPANDED_SELECTIONS,
            }),
        }
    }
}

fn resolve_at_depth<'doc>(
    selections: Vec<&'doc ast::operation::Selection>,
    fragments: &FragmentMap<'doc>,
    depth: usize,
    budget: &mut ExpansionBudget,
) -> Result<Vec<FieldSelection>> {
    if depth >= MAX_SELECTION_DEPTH {
        return Err(FragmentResolutionError::MaxSelectionDepthExceeded {
            max_depth: MAX_SELECTION_DEPTH,
        });
    }

    let mut fields_by_key: IndexMap<(&str, &str), Vec<&ast::operation::Field>> =
        IndexMap::new();
    for field in expand_to_fields(selections, fragments, budget)? {
        let response_key = field.alias.as_deref().unwrap_or(field.name.as_str());
        fields_by_key
            .entry((response_key, field.name.as_str()))
            .or_default()
            .push(field);
    }

    let mut resolved = Vec::with_capacity(fields_by_key.len());
    for (_, fields) in fields_by_key {
        let first = fields[0];
        let sub_selections: Vec<&ast::operation::Selection> =
            fields.iter()
                .flat_map(|field| field.selection_set.items.iter())
                .collect();

        let selection_set =
            if sub_selections.is_empty() {
                None
            } else {
                Some(resolve_at_depth(sub_selections, fragments, depth + 1, budget)?)
            };

        resolved.push(FieldSelection {
            alias: first.alias.clone(),
            name: first.name.clone(),
            selection_set,
        });
    }

    Ok(resolved)
}

fn expand_to_fields<'doc>(
    selections: Vec<&'doc ast::operation::Selection>,
    fragments: &FragmentMap<'doc>,
    budget: &mut ExpansionBudget,
) -> Result<Vec<&'doc ast::operation::Field>> {
    let mut current = selections;
    let mut rounds = 0;
    while !current.iter().all(|sel| matches!(sel, ast::operation::Selection::Field(_))) {
        if rounds == MAX_EXPANSION_ROUNDS {
            return Err(FragmentResolutionError::MaxExpansionRoundsExceeded {
                max_rounds: MAX_EXPANSION_ROUNDS,
            });
        }
        rounds += 1;

        let mut next = Vec::with_capacity(current.len());
        for sel in current {
            if matches!(sel, ast::operation::Selection::Field(_)) {
                next.push(sel);
                continue;
            }
            let expanded = expand_once(sel, fragments);
            budget.spend(expanded.len())?;
            next.extend(expanded);
        }
        current = next;
    }

    Ok(current.into_iter()
        .filter_map(|sel| match sel {
            ast::operation::Selection::Field(field) => Some(field),
            _ => None,
        })
        .collect())
}

fn expand_once<'doc>(
    selection: &'doc ast::operation::Selection,
    fragments: &FragmentMap<'doc>,
) -> Vec<&'doc ast::operation::Selection> {
    match selection {
        ast::operation::Selection::Field(_) => vec![selection],

        ast::operation::Selection::InlineFragment(inline) =>
            inline.selection_set.items.iter().collect(),

        ast::operation::Selection::FragmentSpread(spread) =>
            match fragments.get(spread.fragment_name.as_str()) {
                Some(frag_def) => frag_def.selection_set.items.iter().collect(),
                None => {
                    log::debug!(
                        "Dropping spread of undefined fragment `{}` at {}.",
                        spread.fragment_name,
                        spread.position,
                    );
                    vec![]
                },
            },
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentResolutionError {
    #[error(
        "Fragment spreads were still unresolved after {max_rounds} expansion \
        rounds; the document's fragments likely spread each other in a cycle"
    )]
    MaxExpansionRoundsExceeded {
        max_rounds: usize,
    },

    #[error(
        "Fragment expansion produced more than {max_selections} selections; \
        the document's fragments likely spread each other repeatedly"
    )]
    MaxExpandedSelectionsExceeded {
        max_selections: usize,
    },

    #[error(
        "Selection sets are nested deeper than {max_depth} levels; the \
        document's fragments likely spread each other in a cycle"
    )]
    MaxSelectionDepthExceeded {
        max_depth: usize,
    },
}
