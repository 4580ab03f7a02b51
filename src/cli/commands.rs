//! CLI command implementations.

use std::path::Path;

use crate::config::SweepConfig;
use crate::engine::{
    compare, level_synchronous_bfs_levels_in, run_variant, Variant, WorkerPool,
};
use crate::format::{
    read_edge_list_limited, write_edge_list, GraphReader, GraphWriter, MmapGraphReader,
};
use crate::graph::{generate, Graph, Shape};
use crate::types::{now_rfc3339, NodeId, SweepResult, SWEEP_MAGIC};

/// Load a graph from either a .sweep file or a text edge list, chosen by
/// sniffing the magic bytes. Graphs above `max_nodes` nodes are refused.
pub fn load_graph(path: &Path, max_nodes: usize) -> SweepResult<Graph> {
    let mut magic = [0u8; 4];
    let is_binary = {
        use std::io::Read;
        let mut file = std::fs::File::open(path)?;
        file.read(&mut magic)? == magic.len() && magic == SWEEP_MAGIC
    };
    if is_binary {
        GraphReader::read_from_file_limited(path, max_nodes)
    } else {
        read_edge_list_limited(path, max_nodes)
    }
}

/// Generate a graph and write it as a .sweep file.
pub fn cmd_generate(
    out: &Path,
    shape: Shape,
    nodes: usize,
    probability: f64,
    seed: u64,
    json: bool,
) -> SweepResult<()> {
    let graph = generate(shape, nodes, probability, seed)?;
    GraphWriter::new().write_to_file(&graph, out)?;

    if json {
        let info = serde_json::json!({
            "file": out.display().to_string(),
            "shape": shape.name(),
            "nodes": graph.size(),
            "edges": graph.edge_count(),
            "seed": seed,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "Generated {} graph: {} nodes, {} edges -> {}",
            shape.name(),
            graph.size(),
            graph.edge_count(),
            out.display()
        );
    }
    Ok(())
}

/// Convert a text edge list into a .sweep file.
pub fn cmd_convert(input: &Path, out: &Path, config: &SweepConfig, json: bool) -> SweepResult<()> {
    let graph = read_edge_list_limited(input, config.max_load_nodes)?;
    GraphWriter::new().write_to_file(&graph, out)?;

    if json {
        let info = serde_json::json!({
            "input": input.display().to_string(),
            "output": out.display().to_string(),
            "nodes": graph.size(),
            "edges": graph.edge_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "Converted {} -> {} ({} nodes, {} edges)",
            input.display(),
            out.display(),
            graph.size(),
            graph.edge_count()
        );
    }
    Ok(())
}

/// Write a graph as a text edge list on stdout.
pub fn cmd_export(path: &Path, config: &SweepConfig) -> SweepResult<()> {
    let graph = load_graph(path, config.max_load_nodes)?;
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_edge_list(&graph, &mut lock)
}

/// Display information about a .sweep file.
pub fn cmd_info(path: &Path, config: &SweepConfig, json: bool) -> SweepResult<()> {
    let reader = MmapGraphReader::open(path)?;
    let graph = reader.load_limited(config.max_load_nodes)?;
    let avg_degree = if graph.size() > 0 {
        (0..graph.size())
            .map(|u| graph.degree(u as u32))
            .sum::<usize>() as f64
            / graph.size() as f64
    } else {
        0.0
    };

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "version": reader.header().version,
            "nodes": graph.size(),
            "edges": graph.edge_count(),
            "avg_degree": avg_degree,
            "max_degree": graph.max_degree(),
            "isolated_nodes": graph.isolated_count(),
            "file_size": reader.file_size(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Version: {}", reader.header().version);
        println!("Nodes: {}", graph.size());
        println!("Edges: {}", graph.edge_count());
        println!("Avg degree: {:.2}", avg_degree);
        println!("Max degree: {}", graph.max_degree());
        println!("Isolated nodes: {}", graph.isolated_count());
        println!("File size: {}", format_size(reader.file_size() as u64));
    }
    Ok(())
}

/// What `traverse` reports for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraverseSummary {
    pub reached: usize,
    pub redundant_visits: Option<usize>,
    pub ceiling_hit: bool,
    /// Per-level sizes, only for the level-synchronous BFS.
    pub level_sizes: Option<Vec<usize>>,
}

/// Run `variant` once. The level-synchronous BFS is run in its per-level
/// form so level sizes and the reached count come from the same sweep.
pub fn traverse(
    graph: &Graph,
    start: NodeId,
    variant: Variant,
    pool: &WorkerPool,
) -> SweepResult<TraverseSummary> {
    if variant == Variant::LevelSynchronousBfs {
        let levels = level_synchronous_bfs_levels_in(pool, graph, start)?;
        return Ok(TraverseSummary {
            reached: levels.total(),
            redundant_visits: None,
            ceiling_hit: false,
            level_sizes: Some(levels.sizes()),
        });
    }

    let run = run_variant(variant, graph, start, pool)?;
    Ok(TraverseSummary {
        reached: run.reached.len(),
        redundant_visits: run.redundant_visits,
        ceiling_hit: run.ceiling_hit,
        level_sizes: None,
    })
}

/// Run one traversal variant.
pub fn cmd_traverse(
    path: &Path,
    start: i64,
    variant: Variant,
    config: &SweepConfig,
    json: bool,
) -> SweepResult<()> {
    let graph = load_graph(path, config.max_load_nodes)?;
    let start = graph.check_node(start)?;
    let pool = WorkerPool::from_config(config)?;

    let run = traverse(&graph, start, variant, &pool)?;

    if json {
        let info = serde_json::json!({
            "algorithm": variant.name(),
            "start": start,
            "workers": pool.workers(),
            "reached": run.reached,
            "redundant_visits": run.redundant_visits,
            "ceiling_hit": run.ceiling_hit,
            "level_sizes": run.level_sizes,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "{} from {}: reached {} of {} nodes",
            variant,
            start,
            run.reached,
            graph.size()
        );
        if let Some(redundant) = run.redundant_visits {
            println!("  Redundant visits: {}", redundant);
        }
        if run.ceiling_hit {
            println!("  Visit ceiling hit: result is partial");
        }
        if let Some(sizes) = &run.level_sizes {
            println!("  Levels: {}", sizes.len());
            for (depth, size) in sizes.iter().enumerate() {
                println!("    [{}] {} nodes", depth, size);
            }
        }
    }
    Ok(())
}

/// Time all four variants from one start node.
pub fn cmd_bench(
    path: &Path,
    start: i64,
    config: &SweepConfig,
    rounds: usize,
    json: bool,
) -> SweepResult<()> {
    let graph = load_graph(path, config.max_load_nodes)?;
    let start = graph.check_node(start)?;
    let pool = WorkerPool::from_config(config)?;
    let report = compare(&graph, start, &pool, rounds)?;

    if json {
        let info = serde_json::json!({
            "timestamp": now_rfc3339(),
            "file": path.display().to_string(),
            "nodes": graph.size(),
            "edges": graph.edge_count(),
            "comparison": report,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "Graph: {} nodes, {} edges; start {}; {} workers; {} rounds",
            graph.size(),
            graph.edge_count(),
            start,
            report.workers,
            report.rounds
        );
        for t in &report.timings {
            print!(
                "  {:<10} best {:>10.3} ms  mean {:>10.3} ms  reached {}",
                t.variant.name(),
                t.best_ms,
                t.mean_ms,
                t.reached
            );
            if let Some(redundant) = t.redundant_visits {
                print!("  redundant {}", redundant);
            }
            if t.ceiling_hit {
                print!("  (ceiling hit)");
            }
            println!();
        }
        println!(
            "Exact variants agree: {}",
            if report.exact_sets_agree { "yes" } else { "NO" }
        );
    }
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
