use std::fmt;

// sidebar errors
//
// MissingElement is the only failure the toggle itself can produce; the others
// come from the browser host and are carried here so that callers only see one type
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarError {
    MissingElement {
        id: String,
    },
    Style {
        id: String,
        property: &'static str,
        reason: String,
    },
    Listener {
        id: String,
        reason: String,
    },
    NoDocument,
}

impl fmt::Display for SidebarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SidebarError::MissingElement { id } => {
                write!(f, "sidebar element not found: #{id}")
            }
            SidebarError::Style {
                id,
                property,
                reason,
            } => write!(f, "failed to set {property} on #{id}: {reason}"),
            SidebarError::Listener { id, reason } => {
                write!(f, "failed to attach click listener to #{id}: {reason}")
            }
            SidebarError::NoDocument => write!(f, "no global window or document exists"),
        }
    }
}

impl std::error::Error for SidebarError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_id() {
        let err = SidebarError::MissingElement {
            id: String::from("controls-side-bar"),
        };

        assert_eq!(err.to_string(), "sidebar element not found: #controls-side-bar");
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = SidebarError::NoDocument.into();

        assert!(err.downcast_ref::<SidebarError>().is_some());
    }
}
