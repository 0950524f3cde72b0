use serde::{Deserialize, Serialize};

/// Defaults and build options for a [`Dialog`](crate::Dialog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogSettings {
    /// Initial dialog width written to the header row.
    pub default_width: i32,
    /// Initial dialog height written to the header row.
    pub default_height: i32,
    /// Initial dialog title.
    pub default_title: String,
    /// Prefix of generated list names (`<prefix>_<Kind>_<Index>`).
    pub list_name_prefix: String,
    /// Reject list names the host would not accept before registering them.
    ///
    /// When disabled, invalid names surface as host registration failures instead.
    pub validate_list_names: bool,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            default_width: 300,
            default_height: 200,
            default_title: "Text".to_string(),
            list_name_prefix: "Gen".to_string(),
            validate_list_names: true,
        }
    }
}
