//
// This file is part of tree_search.
//
// tree_search is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tree_search is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tree_search. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2017 Chris Foster
//

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tree_search::analysis::search::{Analysis, AlphaBetaSearch, MinimaxSearch, Search};
use tree_search::tree::description::load_trees;
use tree_search::tree::Tree;

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Algorithm {
    Minimax,
    AlphaBeta,
    Both,
}

#[derive(Parser)]
#[command(name = "tree_search")]
#[command(version, about = "Evaluates game trees with minimax and alpha-beta search", long_about = None)]
struct Cli {
    /// JSON tree descriptions, each holding one tree or a list of trees
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Plies to search; the full height of each tree by default
    #[arg(short, long)]
    depth: Option<u8>,

    /// Search with the root player minimizing
    #[arg(long)]
    minimize: bool,

    #[arg(short, long, value_enum, default_value_t = Algorithm::Both)]
    algorithm: Algorithm,

    /// Initial alpha bound for alpha-beta search
    #[arg(long, allow_hyphen_values = true, default_value_t = f64::NEG_INFINITY)]
    alpha: f64,

    /// Initial beta bound for alpha-beta search
    #[arg(long, allow_hyphen_values = true, default_value_t = f64::INFINITY)]
    beta: f64,

    /// Print the principal variation and search statistics
    #[arg(long)]
    stats: bool,

    /// Print each tree with the values backed up by the last search
    #[arg(long)]
    print_tree: bool,
}

impl Cli {
    fn minimax(&self) -> MinimaxSearch {
        let search = match self.depth {
            Some(depth) => MinimaxSearch::with_depth(depth),
            None => MinimaxSearch::new(),
        };
        if self.minimize { search.minimizing() } else { search }
    }

    fn alpha_beta(&self) -> AlphaBetaSearch<f64> {
        let search = match self.depth {
            Some(depth) => AlphaBetaSearch::with_depth(depth),
            None => AlphaBetaSearch::new(),
        }.with_window(self.alpha, self.beta);
        if self.minimize { search.minimizing() } else { search }
    }
}

fn report(cli: &Cli, label: &str, analysis: &Analysis<f64>) {
    println!("{} result: {}", label, analysis.evaluation);
    if cli.stats {
        println!("{}", analysis);
    }
}

fn evaluate(cli: &Cli, mut tree: Tree<f64>) -> Result<()> {
    let mut last = None;

    if cli.algorithm != Algorithm::AlphaBeta {
        let analysis = cli.minimax().search(&tree)?;
        report(cli, "Minimax", &analysis);
        last = Some(analysis);
    }

    if cli.algorithm != Algorithm::Minimax {
        let analysis = cli.alpha_beta().search(&tree)?;
        report(cli, "Alpha-beta pruning", &analysis);
        last = Some(analysis);
    }

    if cli.print_tree {
        if let Some(analysis) = last {
            analysis.annotations.write_back(&mut tree);
        }
        print!("{}", tree);
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    for file in &cli.files {
        let trees = load_trees::<f64, _>(file)
            .with_context(|| format!("cannot load trees from {}", file.display()))?;

        for (index, tree) in trees.into_iter().enumerate() {
            println!("{} [{}] ({} nodes, {} plies):", file.display(), index, tree.len(), tree.height());
            evaluate(&cli, tree).with_context(|| format!("cannot evaluate tree {} of {}", index, file.display()))?;
            println!();
        }
    }

    Ok(())
}
