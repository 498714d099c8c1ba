pub mod detail_view;
pub mod list_view;
pub mod widgets;

/// Identifies one timer surface on screen. Each surface owns an independent
/// countdown timer for as long as it is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerSurface {
    Hero(String),
    Card(String),
    Detail(String),
}
