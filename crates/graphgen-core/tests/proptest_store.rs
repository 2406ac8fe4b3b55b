use graphgen_core::{ArcKind, ArcOp, Graph, IndexArg};
use proptest::prelude::*;

/// Store operation drawn by the generators. Indices are raw and may be out
/// of range; `None` stands for the `last` sentinel.
#[derive(Debug, Clone)]
enum Op {
    Add,
    AddLinked(Vec<Option<u16>>),
    Delete(Option<u16>),
    Connect(Option<u16>, Option<u16>, bool),
    Set(Option<u16>, Vec<Option<u16>>),
}

fn arb_index() -> impl Strategy<Value = Option<u16>> {
    prop_oneof![
        1 => Just(None),
        6 => (0u16..24).prop_map(Some),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        2 => prop::collection::vec(arb_index(), 0..4).prop_map(Op::AddLinked),
        2 => arb_index().prop_map(Op::Delete),
        5 => (arb_index(), arb_index(), any::<bool>()).prop_map(|(a, b, add)| Op::Connect(a, b, add)),
        1 => (arb_index(), prop::collection::vec(arb_index(), 0..5)).prop_map(|(a, t)| Op::Set(a, t)),
    ]
}

fn arg(raw: Option<u16>) -> IndexArg {
    raw.map_or(IndexArg::Last, IndexArg::from_raw)
}

/// Plain adjacency lists with the same semantics, written the obvious way.
#[derive(Debug, Default)]
struct Model {
    adj: Vec<Vec<usize>>,
}

impl Model {
    fn resolve(&self, raw: Option<u16>) -> Option<usize> {
        let idx = raw.map_or(self.adj.len().saturating_sub(1), usize::from);
        (idx < self.adj.len()).then_some(idx)
    }

    fn add(&mut self) {
        self.adj.push(Vec::new());
    }

    fn delete(&mut self, raw: Option<u16>) {
        let Some(i) = self.resolve(raw) else { return };
        self.adj.remove(i);
        for row in &mut self.adj {
            row.retain(|&t| t != i);
            for t in row.iter_mut() {
                if *t > i {
                    *t -= 1;
                }
            }
        }
    }

    fn connect(&mut self, a: Option<u16>, b: Option<u16>, add: bool) {
        let (Some(a), Some(b)) = (self.resolve(a), self.resolve(b)) else {
            return;
        };
        let row = &mut self.adj[a];
        if add {
            if !row.contains(&b) {
                row.push(b);
            }
        } else {
            row.retain(|&t| t != b);
        }
    }

    fn set(&mut self, a: Option<u16>, targets: &[Option<u16>]) {
        let Some(a) = self.resolve(a) else { return };
        let Some(resolved) = targets
            .iter()
            .map(|&t| self.resolve(t))
            .collect::<Option<Vec<_>>>()
        else {
            return;
        };
        let mut row = Vec::new();
        for t in resolved {
            if !row.contains(&t) {
                row.push(t);
            }
        }
        self.adj[a] = row;
    }
}

fn apply(graph: &mut Graph, model: &mut Model, op: &Op) {
    match op {
        Op::Add => {
            graph.add(None).expect("add");
            model.add();
        }
        Op::AddLinked(targets) => {
            graph.add(None).expect("add");
            model.add();
            for &t in targets {
                graph
                    .connect(IndexArg::Last, arg(t), ArcOp::Add)
                    .expect("connect");
                model.connect(None, t, true);
            }
        }
        Op::Delete(i) => {
            graph.delete(arg(*i));
            model.delete(*i);
        }
        Op::Connect(a, b, add) => {
            let op = if *add { ArcOp::Add } else { ArcOp::Delete };
            graph.connect(arg(*a), arg(*b), op).expect("connect");
            model.connect(*a, *b, *add);
        }
        Op::Set(a, targets) => {
            let args: Vec<IndexArg> = targets.iter().map(|&t| arg(t)).collect();
            let _ = graph.set_arcs(arg(*a), &args);
            model.set(*a, targets);
        }
    }
}

fn snapshot(graph: &Graph) -> Vec<Vec<usize>> {
    graph
        .iter()
        .map(|(_, v)| v.arcs().iter().map(|t| t.as_usize()).collect())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn every_arc_stays_in_range(ops in prop::collection::vec(arb_op(), 1..80)) {
        let mut graph = Graph::with_capacity(1).expect("create");
        let mut model = Model::default();
        for op in &ops {
            apply(&mut graph, &mut model, op);
            let len = graph.len();
            for (_, vertex) in graph.iter() {
                for target in vertex.arcs() {
                    prop_assert!(target.as_usize() < len);
                }
            }
        }
    }

    #[test]
    fn arc_lists_never_hold_duplicates(ops in prop::collection::vec(arb_op(), 1..80)) {
        let mut graph = Graph::with_capacity(2).expect("create");
        let mut model = Model::default();
        for op in &ops {
            apply(&mut graph, &mut model, op);
            prop_assert!(graph.check_invariants().is_ok(), "after {:?}", op);
        }
    }

    #[test]
    fn store_matches_reference_model(ops in prop::collection::vec(arb_op(), 1..80)) {
        let mut graph = Graph::with_capacity(3).expect("create");
        let mut model = Model::default();
        for op in &ops {
            apply(&mut graph, &mut model, op);
            prop_assert_eq!(snapshot(&graph), model.adj.clone(), "after {:?}", op);
        }
    }

    #[test]
    fn capacity_never_shrinks(ops in prop::collection::vec(arb_op(), 1..80)) {
        let mut graph = Graph::with_capacity(1).expect("create");
        let mut model = Model::default();
        let mut capacity = graph.capacity();
        for op in &ops {
            apply(&mut graph, &mut model, op);
            prop_assert!(graph.capacity() >= capacity);
            prop_assert!(graph.len() <= graph.capacity());
            capacity = graph.capacity();
        }
    }

    #[test]
    fn two_way_count_matches_pair_count(ops in prop::collection::vec(arb_op(), 1..60)) {
        let mut graph = Graph::with_capacity(1).expect("create");
        let mut model = Model::default();
        for op in &ops {
            apply(&mut graph, &mut model, op);
        }

        let mut pairs = 0;
        let mut one_way = 0;
        for (a, row) in model.adj.iter().enumerate() {
            for &b in row {
                if a != b && model.adj[b].contains(&a) {
                    if a < b {
                        pairs += 1;
                    }
                } else {
                    one_way += 1;
                }
            }
        }
        let isolated = model.adj.iter().filter(|row| row.is_empty()).count();

        let stats = graph.count();
        prop_assert_eq!(stats.two_way, pairs);
        prop_assert_eq!(stats.one_way, one_way);
        prop_assert_eq!(stats.isolated, isolated);
    }

    #[test]
    fn classify_only_sees_forward_arcs(ops in prop::collection::vec(arb_op(), 1..60), a in 0u16..24, b in 0u16..24) {
        let mut graph = Graph::with_capacity(1).expect("create");
        let mut model = Model::default();
        for op in &ops {
            apply(&mut graph, &mut model, op);
        }
        let (ai, bi) = (usize::from(a), usize::from(b));
        let result = graph.classify(IndexArg::from_raw(a), IndexArg::from_raw(b));
        if ai >= model.adj.len() || bi >= model.adj.len() {
            prop_assert!(result.is_err());
        } else {
            let kind = result.expect("live indices");
            let forward = model.adj[ai].contains(&bi);
            let backward = ai != bi && model.adj[bi].contains(&ai);
            let expected = match (forward, backward) {
                (false, _) => ArcKind::None,
                (true, false) => ArcKind::OneWay,
                (true, true) => ArcKind::TwoWay,
            };
            prop_assert_eq!(kind, expected);
        }
    }
}
