//! DOT export for debugging.

use std::fmt::{self, Write};

use super::FrameGraph;

impl FrameGraph {
    /// Dump the graph in graphviz DOT form.
    ///
    /// One node per pass (`P<id>`, orange, dimmed when culled), one node per
    /// resource version (`R<index>_<version>`, sky blue, dimmed when
    /// unreferenced). Write edges run pass to resource in red, read edges
    /// resource to pass in green, alias edges dashed yellow. With
    /// `include_culled` false, culled passes and unreferenced resources are
    /// suppressed entirely.
    ///
    /// The export reads the graph as-is: called between
    /// [`compile`](FrameGraph::compile) and
    /// [`execute`](FrameGraph::execute) it shows reference counts and
    /// culling results, called earlier everything counts as unreferenced.
    pub fn export_graphviz<W: Write>(&self, out: &mut W, include_culled: bool) -> fmt::Result {
        writeln!(out, "digraph framegraph {{")?;
        writeln!(out, "rankdir = LR")?;
        writeln!(out, "bgcolor = black")?;
        writeln!(
            out,
            "node [shape=rectangle, fontname=\"helvetica\", fontsize=10]"
        )?;
        writeln!(out)?;

        // Passes.
        for pass in &self.passes {
            if !include_culled && pass.ref_count == 0 {
                continue;
            }
            writeln!(
                out,
                "\"P{}\" [label=\"{}\\nrefs: {}\\nseq: {}\", style=filled, fillcolor={}]",
                pass.id,
                pass.name,
                pass.ref_count,
                pass.id,
                if pass.ref_count > 0 {
                    "darkorange"
                } else {
                    "darkorange4"
                }
            )?;
        }

        // One node per resource version, up to the current version.
        writeln!(out)?;
        for node in &self.resource_nodes {
            let readers = self.node_reader_count(node.index);
            if !include_culled && readers == 0 {
                continue;
            }
            for version in 0..=node.version {
                writeln!(
                    out,
                    "\"R{}_{}\" [label=\"{}\\n(version: {})\\nid:{}\\nrefs:{}\", style=filled, fillcolor={}]",
                    node.index,
                    version,
                    node.name,
                    version,
                    node.index,
                    readers,
                    if readers > 0 { "skyblue" } else { "skyblue4" }
                )?;
            }
        }

        // Write edges, pass to resource.
        writeln!(out)?;
        for pass in &self.passes {
            if !include_culled && pass.ref_count == 0 {
                continue;
            }
            write!(out, "P{} -> {{ ", pass.id)?;
            for written in &pass.writes {
                if !include_culled && self.node_reader_count(written.index()) == 0 {
                    continue;
                }
                write!(out, "R{}_{} ", written.index(), written.version())?;
            }
            writeln!(out, "}} [color=red2]")?;
        }

        // Read edges, resource to pass.
        writeln!(out)?;
        for node in &self.resource_nodes {
            if !include_culled && self.node_reader_count(node.index) == 0 {
                continue;
            }
            for version in 0..=node.version {
                write!(out, "R{}_{} -> {{ ", node.index, version)?;
                for pass in &self.passes {
                    if !include_culled && pass.ref_count == 0 {
                        continue;
                    }
                    for read in &pass.reads {
                        if read.index() == node.index && read.version() == version {
                            write!(out, "P{} ", pass.id)?;
                        }
                    }
                }
                writeln!(out, "}} [color=lightgreen]")?;
            }
        }

        // Aliases.
        if !self.aliases.is_empty() {
            writeln!(out)?;
            for alias in &self.aliases {
                writeln!(
                    out,
                    "R{}_{} -> R{}_{} [color=yellow, style=dashed]",
                    alias.from.index(),
                    alias.from.version(),
                    alias.to.index(),
                    alias.to.version()
                )?;
            }
        }

        writeln!(out, "}}")
    }

    /// Reader count of the backing record behind a resource node, zero
    /// before compile assigns records.
    fn node_reader_count(&self, node_index: u16) -> u32 {
        self.resource_nodes[node_index as usize]
            .entry
            .map(|entry| self.registry[entry].reader_count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::ResourceHandle;
    use crate::types::{AttachmentFlags, TextureDescriptor, TextureFormat};

    #[derive(Default, Clone)]
    struct PassData {
        output: ResourceHandle,
    }

    fn compiled_graph() -> FrameGraph {
        let mut fg = FrameGraph::new();
        let render = fg.add_pass::<PassData, _, _>(
            "Render",
            |builder, data| {
                let created = builder.create_texture(
                    "target",
                    TextureDescriptor::new_2d(32, 32, TextureFormat::Rgba8Unorm),
                );
                data.output = builder.write(created, AttachmentFlags::COLOR);
            },
            |_, _, _| {},
        );
        fg.add_pass::<PassData, _, _>(
            "Orphan",
            |builder, data| {
                let created = builder.create_texture(
                    "unused",
                    TextureDescriptor::new_2d(32, 32, TextureFormat::Rgba8Unorm),
                );
                data.output = builder.write(created, AttachmentFlags::COLOR);
            },
            |_, _, _| {},
        );
        fg.present(render.output);
        fg.compile().unwrap();
        fg
    }

    #[test]
    fn test_export_structure() {
        let fg = compiled_graph();
        let mut out = String::new();
        fg.export_graphviz(&mut out, true).unwrap();

        assert!(out.starts_with("digraph framegraph {"));
        assert!(out.contains("rankdir = LR"));
        assert!(out.contains("bgcolor = black"));
        // Live pass, culled pass, presented resource versions.
        assert!(out.contains("\"P0\""));
        assert!(out.contains("fillcolor=darkorange]"));
        assert!(out.contains("fillcolor=darkorange4]"));
        assert!(out.contains("\"R0_0\""));
        assert!(out.contains("\"R0_1\""));
        assert!(out.contains("[color=red2]"));
        assert!(out.contains("[color=lightgreen]"));
        assert!(out.trim_end().ends_with('}'));
    }

    #[test]
    fn test_export_suppresses_culled() {
        let fg = compiled_graph();
        let mut out = String::new();
        fg.export_graphviz(&mut out, false).unwrap();

        // The orphan pass and its resource are gone.
        assert!(!out.contains("Orphan"));
        assert!(!out.contains("R1_"));
        assert!(out.contains("\"P0\""));
    }

    #[test]
    fn test_export_includes_aliases() {
        let mut fg = FrameGraph::new();
        let src = fg.add_pass::<PassData, _, _>(
            "Src",
            |builder, data| {
                let created = builder.create_texture(
                    "src",
                    TextureDescriptor::new_2d(32, 32, TextureFormat::Rgba8Unorm),
                );
                data.output = builder.write(created, AttachmentFlags::COLOR);
            },
            |_, _, _| {},
        );
        let dst = fg.add_pass::<PassData, _, _>(
            "Dst",
            |builder, data| {
                let created = builder.create_texture(
                    "dst",
                    TextureDescriptor::new_2d(32, 32, TextureFormat::Rgba8Unorm),
                );
                data.output = builder.write(created, AttachmentFlags::COLOR);
            },
            |_, _, _| {},
        );
        fg.present(dst.output);
        fg.move_resource(src.output, dst.output);
        fg.compile().unwrap();

        let mut out = String::new();
        fg.export_graphviz(&mut out, true).unwrap();
        assert!(out.contains("[color=yellow, style=dashed]"));
    }
}
