use serde::{Deserialize, Serialize};

use crate::{deserialize_utils::*, string_new_types::NonEmptyString};

/// A location/port code row from the reference feed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortLocation {
    #[serde(default, deserialize_with = "opt_string_lossy")]
    pub location_code: Option<NonEmptyString>,
    #[serde(default, deserialize_with = "opt_string_lossy")]
    pub location_name: Option<NonEmptyString>,
}

#[cfg(feature = "test")]
mod test {
    use super::*;

    impl PortLocation {
        pub fn test_default() -> PortLocation {
            PortLocation {
                location_code: Some("SGSIN".parse().unwrap()),
                location_name: Some("SINGAPORE".parse().unwrap()),
            }
        }
    }
}
