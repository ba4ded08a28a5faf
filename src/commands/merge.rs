use crate::areas::comparison::Comparison;
use crate::artifacts::render::LinePrefixes;
use crate::artifacts::views::View;
use crate::artifacts::views::projector::ViewProjector;

impl Comparison {
    /// Prints the union of both configurations; `raw` gives plain configuration text
    pub fn merge(&self, raw: bool) -> anyhow::Result<()> {
        let view = ViewProjector::new(self.aligned()).project(View::Merged);

        self.print(&view, LinePrefixes::diff(), raw)
    }
}
