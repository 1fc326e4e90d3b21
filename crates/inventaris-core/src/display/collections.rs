//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers that format collections with consistent structure and
//! graceful empty-collection handling.

use std::fmt;

use crate::availability::ProductAvailability;
use crate::models::{Activity, Borrowing, Category, Product, User};

macro_rules! collection_wrapper {
    ($name:ident, $item:ty, $empty:expr) => {
        #[doc = concat!("Newtype wrapper for displaying collections of `", stringify!($item), "`.")]
        pub struct $name(pub Vec<$item>);

        impl $name {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Get the number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Get an iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    writeln!(f, $empty)
                } else {
                    for item in &self.0 {
                        write!(f, "{}", item)?;
                    }
                    Ok(())
                }
            }
        }
    };
}

collection_wrapper!(Products, Product, "No products found.");
collection_wrapper!(Availabilities, ProductAvailability, "No products found.");
collection_wrapper!(Categories, Category, "No categories found.");
collection_wrapper!(Borrowings, Borrowing, "No borrowings found.");
collection_wrapper!(Users, User, "No users found.");
collection_wrapper!(Activities, Activity, "No activity recorded.");

#[cfg(test)]
mod tests {
    use crate::models::Role;

    use super::*;

    #[test]
    fn test_empty_collections_say_so() {
        assert_eq!(format!("{}", Products(vec![])), "No products found.\n");
        assert_eq!(format!("{}", Borrowings(vec![])), "No borrowings found.\n");
        assert_eq!(format!("{}", Activities(vec![])), "No activity recorded.\n");
    }

    #[test]
    fn test_users_display_each_entry() {
        let users = Users(vec![
            User {
                id: 1,
                name: "Budi".to_string(),
                email: "budi@kantor.id".to_string(),
                role: Role::Admin,
            },
            User {
                id: 2,
                name: "Sari".to_string(),
                email: "sari@kantor.id".to_string(),
                role: Role::Pengguna,
            },
        ]);
        assert_eq!(users.len(), 2);
        let output = format!("{users}");
        assert!(output.contains("Budi"));
        assert!(output.contains("Sari"));
        assert!(output.contains("## Budi (ID: 1)"));
    }
}
