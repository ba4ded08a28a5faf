use crate::areas::comparison::Comparison;
use crate::artifacts::render::LinePrefixes;
use crate::artifacts::views::View;
use crate::artifacts::views::projector::ViewProjector;

impl Comparison {
    /// Prints the lines only the first file has, under their enclosing sections
    pub fn first(&self, raw: bool) -> anyhow::Result<()> {
        let view = ViewProjector::new(self.aligned()).project(View::UniqueToFirst);

        self.print(&view, LinePrefixes::unique_to_first(), raw)
    }
}
