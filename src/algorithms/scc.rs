//! Strongly connected components via Tarjan's algorithm.
//!
//! The depth-first search keeps its own stack of `(vertex, next successor)` frames
//! instead of recursing, so the depth of the graph does not bound the call stack.
use itertools::Itertools;

use crate::graph::*;

struct TarjanState {
    counter: usize,
    index: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
}

impl TarjanState {
    fn new(n:usize) -> Self {
        TarjanState {
            counter: 0,
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
        }
    }

    fn discover(&mut self, v:usize) {
        self.index[v] = Some(self.counter);
        self.lowlink[v] = self.counter;
        self.counter += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
    }
}

/// Returns the strongly connected components of `graph`. Directed edges are followed
/// from source to target, undirected edges both ways.
///
/// Components appear in the order in which the search completes them (a reverse
/// topological order of the condensation); the ids inside a component are sorted.
pub fn tarjan<G:Graph>(graph:&G) -> Vec<Vec<VertexId>> {
    let order = graph.vertex_ids();
    let position:VertexMap<usize> = order.iter().enumerate().map(|(i, u)| (*u, i)).collect();
    let successors:Vec<Vec<usize>> = order.iter().map(|u| {
        match graph.traversals(*u) {
            Ok(it) => it.filter_map(|(_, v)| position.get(&v).copied()).sorted().dedup().collect(),
            Err(_) => Vec::new()
        }
    }).collect();

    let n = order.len();
    let mut state = TarjanState::new(n);
    let mut components = Vec::new();
    let mut frames:Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if state.index[root].is_some() {
            continue;
        }
        state.discover(root);
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let (v, next) = *frame;

            if next < successors[v].len() {
                frame.1 += 1;
                let w = successors[v][next];
                match state.index[w] {
                    None => {
                        state.discover(w);
                        frames.push((w, 0));
                    },
                    Some(iw) if state.on_stack[w] => {
                        state.lowlink[v] = state.lowlink[v].min(iw);
                    },
                    Some(_) => {}
                }
                continue;
            }

            // All successors of v are done
            frames.pop();
            if Some(state.lowlink[v]) == state.index[v] {
                let mut comp = Vec::new();
                while let Some(w) = state.stack.pop() {
                    state.on_stack[w] = false;
                    comp.push(order[w]);
                    if w == v {
                        break;
                    }
                }
                comp.sort_unstable();
                components.push(comp);
            }
            if let Some(&(parent, _)) = frames.last() {
                state.lowlink[parent] = state.lowlink[parent].min(state.lowlink[v]);
            }
        }
    }

    components
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
