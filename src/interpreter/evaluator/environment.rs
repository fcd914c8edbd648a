use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// A lexical scope: a mapping from names to values plus an optional link to
/// the enclosing scope.
///
/// Lookup walks outward through the chain until a binding is found;
/// insertion always targets this frame. Frames are handed out as
/// `Rc<Environment>` with interior mutability for the local map, so a
/// closure's captured frame remains alive (and visible to later bindings in
/// the defining scope) for as long as the closure value exists, even after
/// the defining scope has otherwise exited.
#[derive(Debug, Default)]
pub struct Environment {
    store: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a new global (outermost) environment.
    ///
    /// # Example
    /// ```
    /// use brio::interpreter::{evaluator::environment::Environment, value::Value};
    ///
    /// let env = Environment::new();
    /// env.set("x", Value::Integer(5));
    ///
    /// assert_eq!(env.get("x"), Some(Value::Integer(5)));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates a new environment enclosed by `outer`.
    ///
    /// Used for function application: each call evaluates its body in a
    /// fresh frame whose outer link is the function's captured environment.
    ///
    /// # Example
    /// ```
    /// use brio::interpreter::{evaluator::environment::Environment, value::Value};
    ///
    /// let global = Environment::new();
    /// global.set("x", Value::Integer(1));
    ///
    /// let local = Environment::enclosed(global);
    /// local.set("y", Value::Integer(2));
    ///
    /// // The outer binding is visible through the chain.
    /// assert_eq!(local.get("x"), Some(Value::Integer(1)));
    /// assert_eq!(local.get("y"), Some(Value::Integer(2)));
    /// ```
    #[must_use]
    pub fn enclosed(outer: Rc<Self>) -> Rc<Self> {
        Rc::new(Self { store: RefCell::new(HashMap::new()),
                       outer: Some(outer), })
    }

    /// Resolves a name, searching from this frame outward.
    ///
    /// Returns a clone of the bound value, or `None` if no frame in the
    /// chain binds the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.borrow().get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds a name in this (innermost) frame. Rebinding an existing name
    /// overwrites it; outer frames are never modified.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.store.borrow_mut().insert(name.into(), value);
    }
}
