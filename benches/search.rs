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

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tree_search::analysis::search::{AlphaBetaSearch, MinimaxSearch, Search};
use tree_search::tree::{Node, Tree};

fn uniform_node<R>(rng: &mut R, branching: usize, height: usize) -> Node<f64> where
    R: Rng {
    if height == 0 {
        return Node::leaf(rng.gen_range(-100.0..100.0));
    }
    Node::branch((0..branching).map(|_| uniform_node(rng, branching, height - 1)).collect())
}

fn uniform_tree(branching: usize, height: usize) -> Tree<f64> {
    let mut rng = StdRng::seed_from_u64(2017);
    Tree::new(uniform_node(&mut rng, branching, height)).unwrap()
}

fn bench_search(c: &mut Criterion) {
    let tree = uniform_tree(6, 6);

    c.bench_function("minimax 6x6", |b| {
        b.iter(|| MinimaxSearch::new().search(black_box(&tree)).unwrap())
    });

    c.bench_function("alpha-beta 6x6", |b| {
        b.iter(|| AlphaBetaSearch::new().search(black_box(&tree)).unwrap())
    });
}

fn bench_from_json(c: &mut Criterion) {
    let json = include_str!("../demos/four_ply_tree_structures.json");

    c.bench_function("parse four-ply demos", |b| {
        b.iter(|| tree_search::tree::description::parse_trees::<f64>(black_box(json)).unwrap())
    });
}

criterion_group!(benches, bench_search, bench_from_json);
criterion_main!(benches);
