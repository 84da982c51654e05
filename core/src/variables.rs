//! Caller-owned variable storage for the calculator.
//!
//! The calculator never owns its variables: the caller passes a mapping in by
//! mutable reference and keeps it between evaluations, so bindings persist for
//! as long as the caller wants them to. Any conventional string-keyed map
//! works through the [`Variables`] trait.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Name of the pre-seeded π constant.
pub const PI_NAME: &str = "pi";
/// Name of the pre-seeded Euler's number constant.
pub const E_NAME: &str = "e";

/// A mutable name → value store.
pub trait Variables {
    fn get(&self, name: &str) -> Option<f64>;

    fn set(&mut self, name: &str, value: f64);

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<S: BuildHasher> Variables for HashMap<String, f64, S> {
    fn get(&self, name: &str) -> Option<f64> {
        HashMap::get(self, name).copied()
    }

    fn set(&mut self, name: &str, value: f64) {
        match HashMap::get_mut(self, name) {
            Some(slot) => *slot = value,
            None => {
                self.insert(name.to_string(), value);
            }
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl<S: BuildHasher> Variables for hashbrown::HashMap<String, f64, S> {
    fn get(&self, name: &str) -> Option<f64> {
        hashbrown::HashMap::get(self, name).copied()
    }

    fn set(&mut self, name: &str, value: f64) {
        match hashbrown::HashMap::get_mut(self, name) {
            Some(slot) => *slot = value,
            None => {
                self.insert(name.to_string(), value);
            }
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl Variables for BTreeMap<String, f64> {
    fn get(&self, name: &str) -> Option<f64> {
        BTreeMap::get(self, name).copied()
    }

    fn set(&mut self, name: &str, value: f64) {
        match BTreeMap::get_mut(self, name) {
            Some(slot) => *slot = value,
            None => {
                self.insert(name.to_string(), value);
            }
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

/// Binds `pi` and `e` unless the caller already bound those names.
///
/// Idempotent: a redefinition from an earlier evaluation on the same mapping
/// is left untouched.
pub fn seed_constants<V: Variables + ?Sized>(vars: &mut V) {
    for (name, value) in [
        (PI_NAME, std::f64::consts::PI),
        (E_NAME, std::f64::consts::E),
    ] {
        if !vars.contains(name) {
            tracing::debug!(name, value, "seeding constant");
            vars.set(name, value);
        }
    }
}

/// Whether `name` is a valid variable or function name.
///
/// The first char must be an ASCII letter; the rest may be ASCII letters,
/// digits or `_`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_continue)
}

pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub(crate) fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
