use crate::areas::comparison::Comparison;
use crate::artifacts::render::LinePrefixes;
use crate::artifacts::views::View;
use crate::artifacts::views::projector::ViewProjector;

impl Comparison {
    /// Prints the configuration both files share, as plain configuration text
    pub fn common(&self) -> anyhow::Result<()> {
        let view = ViewProjector::new(self.aligned()).project(View::CommonToBoth);

        self.print(&view, LinePrefixes::diff(), true)
    }
}
