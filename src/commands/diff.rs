use crate::areas::comparison::Comparison;
use crate::artifacts::render::LinePrefixes;
use crate::artifacts::views::View;
use crate::artifacts::views::projector::ViewProjector;

impl Comparison {
    pub fn diff(&self, raw: bool) -> anyhow::Result<()> {
        let view = ViewProjector::new(self.aligned()).project(View::Differences);

        self.print(&view, LinePrefixes::diff(), raw)
    }
}
