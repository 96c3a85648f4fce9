use crate::settings::{BundleSettings, Configuration, PropertySettings};

pub(crate) trait BuiltIn {
    fn built_in() -> Self;
}

impl BuiltIn for Configuration {
    /// Construct the built-in settings
    ///
    fn built_in() -> Self {
        Configuration {
            property: PropertySettings {
                readonly: vec![
                    "cluster-infrastructure".into(),
                    "cluster-name".into(),
                    "dc-version".into(),
                    "have-watchdog".into(),
                    "last-lrm-refresh".into(),
                ],
            },
            bundle: BundleSettings {
                // rkt is still accepted by Pacemaker 2 but pcs cannot create it.
                cmd_container_types: vec!["docker".into(), "podman".into()],
            },
        }
    }
}
