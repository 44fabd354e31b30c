use crate::rights::AdministratorRights;

/// An optional requirement on one observable attribute of the shared dialog.
///
/// `value` is only consulted while `restrict` is set. It is still kept (and
/// persisted) when the restriction is inactive, so a stored policy parses back
/// to exactly the value that was written.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restriction<T> {
    /// Whether the requirement is enforced.
    pub restrict: bool,
    /// Required value when enforced.
    pub value: T,
}

impl<T> Restriction<T> {
    /// An enforced requirement on `value`.
    #[must_use]
    pub const fn require(value: T) -> Self {
        Self {
            restrict: true,
            value,
        }
    }

    /// Returns `true` when the requirement is enforced.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.restrict
    }

    /// The required value, if enforced.
    #[must_use]
    pub const fn required(&self) -> Option<&T> {
        if self.restrict { Some(&self.value) } else { None }
    }
}

impl<T: Default> Restriction<T> {
    /// No requirement.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Builds a restriction from an optional wire value.
    ///
    /// `None` becomes an inactive restriction holding the default value.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::require(value),
            None => Self::default(),
        }
    }
}

impl<T: Copy> Restriction<T> {
    /// The enforced value as an option, for wire shapes with optional fields.
    #[must_use]
    pub const fn to_option(self) -> Option<T> {
        if self.restrict { Some(self.value) } else { None }
    }
}

impl Restriction<bool> {
    /// Returns `true` when `actual` satisfies the requirement.
    #[must_use]
    pub const fn admits(self, actual: bool) -> bool {
        !self.restrict || self.value == actual
    }
}

impl Restriction<AdministratorRights> {
    /// Returns `true` when `held` includes every required right.
    #[must_use]
    pub const fn admits(self, held: AdministratorRights) -> bool {
        !self.restrict || held.contains(self.value)
    }
}

impl<T: Default> From<Option<T>> for Restriction<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}
