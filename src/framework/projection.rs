//! # Projections
//!
//! Derived read/write views onto a piece of state owned by someone else.
//!
//! Navigation state in this crate is modelled as a single `Option<Route>` per owner, where
//! `Route` is an enum with one variant per sub-screen. Renderers, intent handlers and editors
//! all need narrower views of that one field: "is the delete confirmation showing?",
//! "give me the editor if we are duplicating", "give me the quantity if the status is in
//! stock". This module provides those views without ever copying the underlying truth.
//!
//! ## Building blocks
//!
//! - [`CasePath`]: the enum counterpart of a struct field accessor. It can *extract* a
//!   variant's payload (if the value currently holds that variant) and *embed* a payload
//!   back into the enum.
//! - [`project_case`]: `&mut Option<E>` to a view of `Option<Payload>` for one variant.
//! - [`presence`]: `&mut Option<E>` to a boolean "is this variant showing" toggle.
//! - [`require_value`]: `&mut Option<T>` to a view that is guaranteed to be present.
//! - [`case_of`]: `&mut E` to a view of one variant's payload, if it currently holds.
//!
//! Every view is built on an exclusive borrow of the source, so no other writer can change
//! the source while a view is alive. Writes are therefore atomic with respect to readers
//! of the source, and a view can never observe a variant switch underneath it.
//!
//! ## The `Binding` trait
//!
//! Views whose value is cheap to copy also implement [`Binding`], a uniform get/set
//! interface used by toggles and steppers.
//!
//! ```rust
//! use inventory_nav::framework::projection::{presence, project_case, unit_mut, Binding, CasePath};
//!
//! #[derive(Debug, PartialEq)]
//! enum Sheet { Confirm, Rename(String) }
//!
//! let rename: CasePath<Sheet, String> = CasePath::new(
//!     |s| match s { Sheet::Rename(n) => Some(n), _ => None },
//!     |s| match s { Sheet::Rename(n) => Some(n), _ => None },
//!     Sheet::Rename,
//! );
//! let confirm: CasePath<Sheet, ()> = CasePath::new(
//!     |s| match s { Sheet::Confirm => Some(&()), _ => None },
//!     |s| match s { Sheet::Confirm => Some(unit_mut()), _ => None },
//!     |()| Sheet::Confirm,
//! );
//!
//! let mut sheet = Some(Sheet::Confirm);
//! assert!(presence(&mut sheet, confirm).get());
//! assert_eq!(project_case(&mut sheet, rename).get(), None);
//!
//! project_case(&mut sheet, rename).set(Some("Mouse".to_string()));
//! assert_eq!(sheet, Some(Sheet::Rename("Mouse".to_string())));
//!
//! presence(&mut sheet, rename).set(false);
//! assert_eq!(sheet, None);
//! ```

use std::ops::{Deref, DerefMut};

/// Uniform read/write access to a value owned elsewhere.
pub trait Binding {
    type Value;

    /// Reads the current value.
    fn get(&self) -> Self::Value;

    /// Overwrites the value in the owner.
    fn set(&mut self, value: Self::Value);

    /// Read-modify-write in one step.
    fn modify(&mut self, f: impl FnOnce(&mut Self::Value))
    where
        Self: Sized,
    {
        let mut value = self.get();
        f(&mut value);
        self.set(value);
    }
}

/// Accessor pair for one variant `Case` of an enum `Enum`.
///
/// `Case` is the payload type of the variant; payload-less variants use `()`, returning
/// `Some(&())` from `extract` and `Some(unit_mut())` from `extract_mut`.
pub struct CasePath<Enum, Case> {
    extract: fn(&Enum) -> Option<&Case>,
    extract_mut: fn(&mut Enum) -> Option<&mut Case>,
    embed: fn(Case) -> Enum,
}

impl<Enum, Case> Clone for CasePath<Enum, Case> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Enum, Case> Copy for CasePath<Enum, Case> {}

impl<Enum, Case> std::fmt::Debug for CasePath<Enum, Case> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = std::any::type_name::<Case>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        write!(f, "CasePath<{}>", name)
    }
}

impl<Enum, Case> CasePath<Enum, Case> {
    pub fn new(
        extract: fn(&Enum) -> Option<&Case>,
        extract_mut: fn(&mut Enum) -> Option<&mut Case>,
        embed: fn(Case) -> Enum,
    ) -> Self {
        Self {
            extract,
            extract_mut,
            embed,
        }
    }

    /// Returns the payload if `value` currently holds this variant.
    pub fn extract<'a>(&self, value: &'a Enum) -> Option<&'a Case> {
        (self.extract)(value)
    }

    pub fn extract_mut<'a>(&self, value: &'a mut Enum) -> Option<&'a mut Case> {
        (self.extract_mut)(value)
    }

    /// Wraps a payload into this variant.
    pub fn embed(&self, case: Case) -> Enum {
        (self.embed)(case)
    }

    pub fn matches(&self, value: &Enum) -> bool {
        self.extract(value).is_some()
    }
}

/// A `&mut ()` for the `extract_mut` of payload-less variants.
///
/// Boxing a zero-sized value never allocates, so leaking the box leaks nothing.
pub fn unit_mut<'a>() -> &'a mut () {
    Box::leak(Box::new(()))
}

// =============================================================================
// Option<Enum> -> Option<Case>
// =============================================================================

/// View of one variant's payload inside an `Option<Enum>`. See [`project_case`].
pub struct CaseProjection<'a, Enum, Case> {
    source: &'a mut Option<Enum>,
    path: CasePath<Enum, Case>,
}

/// Projects `source` onto the payload of one variant.
///
/// - Reading yields the payload if `source` is present and holds the variant, else `None`.
/// - Writing `Some(payload)` overwrites `source` with the variant holding `payload`.
/// - Writing `None` clears `source`.
pub fn project_case<Enum, Case>(
    source: &mut Option<Enum>,
    path: CasePath<Enum, Case>,
) -> CaseProjection<'_, Enum, Case> {
    CaseProjection { source, path }
}

impl<Enum, Case> CaseProjection<'_, Enum, Case> {
    pub fn get(&self) -> Option<&Case> {
        self.source.as_ref().and_then(|value| self.path.extract(value))
    }

    pub fn get_mut(&mut self) -> Option<&mut Case> {
        let path = self.path;
        self.source.as_mut().and_then(|value| path.extract_mut(value))
    }

    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }

    pub fn set(&mut self, case: Option<Case>) {
        *self.source = case.map(|case| self.path.embed(case));
    }
}

impl<Enum, Case: Clone> Binding for CaseProjection<'_, Enum, Case> {
    type Value = Option<Case>;

    fn get(&self) -> Option<Case> {
        CaseProjection::get(self).cloned()
    }

    fn set(&mut self, value: Option<Case>) {
        CaseProjection::set(self, value)
    }
}

// =============================================================================
// Option<Enum> -> bool
// =============================================================================

/// Boolean show/hide toggle for one variant. See [`presence`].
pub struct Presence<'a, Enum, Case> {
    source: &'a mut Option<Enum>,
    path: CasePath<Enum, Case>,
}

/// Projects `source` onto "is this variant showing".
///
/// Writing `false` clears `source` whatever variant it holds. Writing `true` is a no-op:
/// the payload must already have been supplied by whoever set the variant.
pub fn presence<Enum, Case>(
    source: &mut Option<Enum>,
    path: CasePath<Enum, Case>,
) -> Presence<'_, Enum, Case> {
    Presence { source, path }
}

impl<Enum, Case> Binding for Presence<'_, Enum, Case> {
    type Value = bool;

    fn get(&self) -> bool {
        self.source
            .as_ref()
            .is_some_and(|value| self.path.matches(value))
    }

    fn set(&mut self, is_presented: bool) {
        if !is_presented {
            *self.source = None;
        }
    }
}

// =============================================================================
// Option<T> -> T
// =============================================================================

/// A view of an `Option<T>` that is known to be present. See [`require_value`].
pub struct Required<'a, T> {
    value: &'a mut T,
}

/// Hands out a "definitely present" view of `source`, or `None` if it is absent.
///
/// Writes through the view overwrite `source` (which stays present). The sub-screen holding
/// the view never has to deal with absence.
pub fn require_value<T>(source: &mut Option<T>) -> Option<Required<'_, T>> {
    source.as_mut().map(|value| Required { value })
}

impl<T> Required<'_, T> {
    pub fn get(&self) -> &T {
        self.value
    }

    pub fn set(&mut self, value: T) {
        *self.value = value;
    }
}

impl<T> Deref for Required<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value
    }
}

impl<T> DerefMut for Required<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value
    }
}

impl<T: Clone> Binding for Required<'_, T> {
    type Value = T;

    fn get(&self) -> T {
        self.value.clone()
    }

    fn set(&mut self, value: T) {
        Required::set(self, value)
    }
}

// =============================================================================
// Enum -> Case
// =============================================================================

/// A view of one variant's payload of a non-optional enum. See [`case_of`].
pub struct CaseOf<'a, Case> {
    case: &'a mut Case,
}

/// Focuses `source` on one variant, if it currently holds that variant.
///
/// Switching to another variant is done by assigning the enum itself; the returned view
/// only ever edits the payload in place.
pub fn case_of<Enum, Case>(source: &mut Enum, path: CasePath<Enum, Case>) -> Option<CaseOf<'_, Case>> {
    path.extract_mut(source).map(|case| CaseOf { case })
}

impl<Case> Deref for CaseOf<'_, Case> {
    type Target = Case;

    fn deref(&self) -> &Case {
        self.case
    }
}

impl<Case: Clone> Binding for CaseOf<'_, Case> {
    type Value = Case;

    fn get(&self) -> Case {
        self.case.clone()
    }

    fn set(&mut self, value: Case) {
        *self.case = value;
    }
}
