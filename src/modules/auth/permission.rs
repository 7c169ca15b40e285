//! Ownership checks shared by every resource that hangs off a user.
//!
//! Reads are public and never reach this module. Mutations are extracted
//! with [`Auth`](super::middleware::Auth) first, so an anonymous caller is
//! turned away with 401 before ownership is looked at. Handlers resolve the
//! target next (absent → 404) and only then ask [`ensure_owner`], so a
//! denial always means the resource exists.

use crate::modules::user::repository::User;

/// A resource whose mutations are reserved to a single user.
pub trait Owned {
    fn owner_id(&self) -> &str;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Forbidden;

pub fn ensure_owner<R: Owned + ?Sized>(user: &User, resource: &R) -> Result<(), Forbidden> {
    match user.id == resource.owner_id() {
        true => Ok(()),
        false => Err(Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{modules::user::repository::Role, utils::test};

    struct Thing(&'static str);

    impl Owned for Thing {
        fn owner_id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn only_the_owner_may_mutate() {
        let owner = test::user("owner", Role::Owner);
        let others = [
            test::user("customer", Role::Customer),
            test::user("another-owner", Role::Owner),
        ];

        assert_eq!(ensure_owner(&owner, &Thing("owner")), Ok(()));

        for other in &others {
            assert_eq!(ensure_owner(other, &Thing("owner")), Err(Forbidden));
        }
    }

    #[test]
    fn role_does_not_grant_ownership() {
        let mut admin = test::user("admin", Role::Owner);
        admin.is_admin = true;

        assert_eq!(ensure_owner(&admin, &Thing("owner")), Err(Forbidden));
    }
}
