use std::collections::{hash_map::Iter, HashMap};

use crate::errors::errors::ErrorImpl;

use super::value::Value;

/// Runtime environment: a flat mapping from variable name to value.
///
/// Nested scopes do not chain to a parent. `While` and `IfThenElse` take a
/// [`snapshot`](Environment::snapshot), run against it, and reconcile it
/// back with [`merge`](Environment::merge) and
/// [`absorb`](Environment::absorb).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variable_lookup: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<Value> {
        self.variable_lookup.get(variable_name).copied()
    }

    pub fn contains(&self, variable_name: &str) -> bool {
        self.variable_lookup.contains_key(variable_name)
    }

    /// Binds `variable_name`, replacing any previous binding of any kind.
    pub fn declare_variable(&mut self, variable_name: String, value: Value) {
        self.variable_lookup.insert(variable_name, value);
    }

    /// Rebinds an existing variable, keeping its kind.
    pub fn assign_variable(&mut self, variable_name: &str, value: Value) -> Result<(), ErrorImpl> {
        match self.variable_lookup.get_mut(variable_name) {
            None => Err(ErrorImpl::AssignmentToUndeclared {
                variable: variable_name.to_string(),
            }),
            Some(current) if !current.same_kind(&value) => Err(ErrorImpl::AssignmentKindMismatch {
                variable: variable_name.to_string(),
                expected: current.kind(),
                received: value.kind(),
            }),
            Some(current) => {
                *current = value;
                Ok(())
            }
        }
    }

    /// Independent copy used as the environment of a nested scope.
    pub fn snapshot(&self) -> Environment {
        self.clone()
    }

    /// Reconciles a nested scope `inner` with `self` as the outer scope.
    ///
    /// Only keys of `self` survive. A key takes the inner value when it
    /// changed and kept its kind; otherwise the outer value stays.
    pub fn merge(&self, inner: &Environment) -> Environment {
        let variable_lookup = self
            .variable_lookup
            .iter()
            .map(|(name, outer_value)| {
                let value = match inner.variable_lookup.get(name) {
                    Some(inner_value)
                        if inner_value != outer_value && inner_value.same_kind(outer_value) =>
                    {
                        *inner_value
                    }
                    _ => *outer_value,
                };
                (name.clone(), value)
            })
            .collect();

        Environment { variable_lookup }
    }

    /// Copies every key of `self` from `merged`, in place.
    pub fn absorb(&mut self, merged: &Environment) {
        for (name, value) in self.variable_lookup.iter_mut() {
            if let Some(merged_value) = merged.variable_lookup.get(name) {
                *value = *merged_value;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.variable_lookup.iter()
    }
}

impl FromIterator<(String, Value)> for Environment {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Environment {
            variable_lookup: iter.into_iter().collect(),
        }
    }
}
