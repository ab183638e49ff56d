/// Layout of the house detail area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Floor navigation plus room list.
    #[default]
    Standard,
    /// Zoomed plan with the room list beside it.
    PlanExpanded,
}

impl ActiveView {
    /// "Open viewer" transition.
    #[must_use]
    pub fn opened(self) -> Self {
        ActiveView::PlanExpanded
    }

    /// "Close" transition.
    #[must_use]
    pub fn closed(self) -> Self {
        ActiveView::Standard
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self == ActiveView::PlanExpanded
    }
}
