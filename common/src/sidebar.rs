use tracing::{Level, debug, error, info, instrument, warn};

use crate::{config::SidebarConfig, error::SidebarError};

// logical sidebar state
//
// the styles written to the page are always derived from this value, so the four
// visual encodings (rotation, display, flex, margin) cannot drift apart
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SidebarState {
    #[default]
    Hidden,
    Shown,
}

impl SidebarState {
    pub fn toggle(self) -> Self {
        match self {
            SidebarState::Hidden => SidebarState::Shown,
            SidebarState::Shown => SidebarState::Hidden,
        }
    }

    pub fn is_hidden(self) -> bool {
        self == SidebarState::Hidden
    }

    pub fn styles(self) -> SidebarStyles {
        match self {
            // arrow flipped to point at the collapsed sidebar
            SidebarState::Hidden => SidebarStyles {
                transform: "rotateY(180deg)",
                display: "none",
                flex: "unset",
                margin: "5px 5px 0px 5px",
            },
            // empty values drop the inline override and fall back to the stylesheet
            SidebarState::Shown => SidebarStyles {
                transform: "",
                display: "",
                flex: "",
                margin: "",
            },
        }
    }
}

// the four elements the toggle writes to
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SidebarPart {
    FoldControl,
    FoldButton,
    Content,
    Container,
}

impl SidebarPart {
    pub fn property(self) -> &'static str {
        match self {
            SidebarPart::FoldControl => "margin",
            SidebarPart::FoldButton => "transform",
            SidebarPart::Content => "display",
            SidebarPart::Container => "flex",
        }
    }

    pub fn id(self, config: &SidebarConfig) -> &str {
        match self {
            SidebarPart::FoldControl => &config.fold_control,
            SidebarPart::FoldButton => &config.fold_button,
            SidebarPart::Content => &config.content,
            SidebarPart::Container => &config.container,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StyleAssignment {
    pub part: SidebarPart,
    pub property: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SidebarStyles {
    pub transform: &'static str,
    pub display: &'static str,
    pub flex: &'static str,
    pub margin: &'static str,
}

impl SidebarStyles {
    pub fn assignments(&self) -> [StyleAssignment; 4] {
        let assign = |part: SidebarPart, value| StyleAssignment {
            part,
            property: part.property(),
            value,
        };

        [
            assign(SidebarPart::FoldButton, self.transform),
            assign(SidebarPart::Content, self.display),
            assign(SidebarPart::Container, self.flex),
            assign(SidebarPart::FoldControl, self.margin),
        ]
    }

    // None means the values are a mix of both states
    pub fn state(&self) -> Option<SidebarState> {
        [SidebarState::Hidden, SidebarState::Shown]
            .into_iter()
            .find(|state| state.styles() == *self)
    }
}

// page abstraction
//
// the browser host implements these over web-sys; tests use an in-memory page
pub trait StyleElement {
    // the inline value, empty when no override is set
    fn get_style(&self, property: &str) -> anyhow::Result<String>;

    fn set_style(&self, property: &str, value: &str) -> anyhow::Result<()>;

    fn clear_style(&self, property: &str) -> anyhow::Result<()>;
}

pub trait SidebarPage {
    type Element: StyleElement;

    fn lookup(&self, id: &str) -> Option<Self::Element>;
}

// sidebar visibility toggle
//
// one component per page.  the host attaches a single click listener to fold_control()
// that calls on_click(), which dispatches on the stored state instead of swapping handlers
#[derive(Debug)]
pub struct SidebarToggle<E: StyleElement> {
    config: SidebarConfig,
    fold_control: E,
    fold_button: E,
    content: E,
    container: E,
    state: SidebarState,
}

impl<E: StyleElement> SidebarToggle<E> {
    // every element is resolved before anything is written, so a missing id
    // leaves the page exactly as it was
    #[instrument(level=Level::DEBUG, skip(page))]
    pub fn initialize<P>(page: &P, config: &SidebarConfig) -> Result<Self, SidebarError>
    where
        P: SidebarPage<Element = E>,
    {
        info!("setting sidebar events");

        let resolve = |part: SidebarPart| {
            let id = part.id(config);
            page.lookup(id)
                .ok_or_else(|| SidebarError::MissingElement { id: id.to_owned() })
        };

        let fold_control = resolve(SidebarPart::FoldControl)?;
        let fold_button = resolve(SidebarPart::FoldButton)?;
        let content = resolve(SidebarPart::Content)?;
        let container = resolve(SidebarPart::Container)?;

        let mut toggle = SidebarToggle {
            config: config.clone(),
            fold_control,
            fold_button,
            content,
            container,
            state: SidebarState::Hidden,
        };

        // start hidden regardless of what the page currently shows
        toggle.hide()?;

        info!("sidebar ready");
        Ok(toggle)
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn fold_control(&self) -> &E {
        &self.fold_control
    }

    pub fn hide(&mut self) -> Result<(), SidebarError> {
        debug!("hiding sidebar");
        self.render(SidebarState::Hidden)
    }

    pub fn show(&mut self) -> Result<(), SidebarError> {
        debug!("showing sidebar");
        self.render(SidebarState::Shown)
    }

    pub fn on_click(&mut self) -> Result<SidebarState, SidebarError> {
        let next = self.state.toggle();
        debug!(?next, "sidebar clicked");

        self.render(next)?;
        Ok(self.state)
    }

    fn element(&self, part: SidebarPart) -> &E {
        match part {
            SidebarPart::FoldControl => &self.fold_control,
            SidebarPart::FoldButton => &self.fold_button,
            SidebarPart::Content => &self.content,
            SidebarPart::Container => &self.container,
        }
    }

    // all-or-nothing: the inline values are captured first and put back if any write
    // fails, so the page never mixes facets from both states
    fn render(&mut self, state: SidebarState) -> Result<(), SidebarError> {
        let assignments = state.styles().assignments();

        let mut snapshot = Vec::with_capacity(assignments.len());
        for assignment in &assignments {
            let previous = self
                .element(assignment.part)
                .get_style(assignment.property)
                .map_err(|err| self.style_error(assignment, err))?;
            snapshot.push(previous);
        }

        for (written, assignment) in assignments.iter().enumerate() {
            if let Err(err) = self.apply(assignment, assignment.value) {
                let err = self.style_error(assignment, err);
                warn!(%err, "rolling back sidebar styles");

                self.restore(&assignments[..written], &snapshot);
                return Err(err);
            }
        }

        self.state = state;
        Ok(())
    }

    fn apply(&self, assignment: &StyleAssignment, value: &str) -> anyhow::Result<()> {
        let element = self.element(assignment.part);

        if value.is_empty() {
            element.clear_style(assignment.property)
        } else {
            element.set_style(assignment.property, value)
        }
    }

    // best effort; a failure here is logged and the original error is what the caller sees
    fn restore(&self, assignments: &[StyleAssignment], snapshot: &[String]) {
        for (assignment, previous) in assignments.iter().zip(snapshot) {
            if let Err(err) = self.apply(assignment, previous) {
                let err = self.style_error(assignment, err);
                error!(%err, "failed to restore sidebar style");
            }
        }
    }

    fn style_error(&self, assignment: &StyleAssignment, err: anyhow::Error) -> SidebarError {
        SidebarError::Style {
            id: assignment.part.id(&self.config).to_owned(),
            property: assignment.property,
            reason: err.to_string(),
        }
    }
}
