//! No Space Left On Device: directory sizes from a shell session transcript

use anyhow::{Context, anyhow, bail};
use aoc_solver::{OutputSink, ParseError, SolveError, Solver};
use aoc_solver_macros::AutoRegisterSolver;
use std::fmt::Write as _;
use std::io::Write;

const DISK_SIZE: u64 = 70_000_000;
const NEEDED_FREE: u64 = 30_000_000;
const SMALL_DIR_LIMIT: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Dir,
    File(u64),
}

#[derive(Debug)]
struct Node {
    name: String,
    parent: Option<usize>,
    children: Vec<usize>,
    kind: NodeKind,
}

/// Directory tree stored as an arena; nodes refer to each other by index
///
/// A node is always pushed after its parent, so parents have smaller indices
/// than their children.
#[derive(Debug)]
struct FileTree {
    nodes: Vec<Node>,
}

impl FileTree {
    const ROOT: usize = 0;

    fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: "/".to_string(),
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Dir,
            }],
        }
    }

    fn child(&self, dir: usize, name: &str) -> Option<usize> {
        self.nodes[dir]
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes[c].name == name)
    }

    /// Add an entry under `dir`, returning the existing one if already listed
    fn add(&mut self, dir: usize, name: &str, kind: NodeKind) -> usize {
        if let Some(existing) = self.child(dir, name) {
            return existing;
        }
        let index = self.nodes.len();
        self.nodes.push(Node {
            name: name.to_string(),
            parent: Some(dir),
            children: Vec::new(),
            kind,
        });
        self.nodes[dir].children.push(index);
        index
    }

    fn parse(input: &str) -> anyhow::Result<Self> {
        let mut tree = Self::new();
        let mut cwd = Self::ROOT;

        for (line_idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            tree.apply(&mut cwd, line)
                .with_context(|| format!("(line {}) {:?}", line_idx + 1, line))?;
        }
        Ok(tree)
    }

    fn apply(&mut self, cwd: &mut usize, line: &str) -> anyhow::Result<()> {
        if let Some(command) = line.strip_prefix("$ ") {
            match command.split_once(' ') {
                Some(("cd", "/")) => *cwd = Self::ROOT,
                Some(("cd", "..")) => {
                    *cwd = self.nodes[*cwd]
                        .parent
                        .ok_or_else(|| anyhow!("cannot leave the root directory"))?
                }
                Some(("cd", name)) => *cwd = self.add(*cwd, name, NodeKind::Dir),
                None if command == "ls" => {}
                _ => bail!("unknown command"),
            }
        } else if let Some(name) = line.strip_prefix("dir ") {
            self.add(*cwd, name, NodeKind::Dir);
        } else {
            let (size, name) = line
                .split_once(' ')
                .ok_or_else(|| anyhow!("expected `<size> <name>`"))?;
            let size = size.parse().context("invalid file size")?;
            self.add(*cwd, name, NodeKind::File(size));
        }
        Ok(())
    }

    /// Total size of every node, indexed like `nodes`
    fn sizes(&self) -> Vec<u64> {
        let mut sizes: Vec<u64> = self
            .nodes
            .iter()
            .map(|n| match n.kind {
                NodeKind::File(size) => size,
                NodeKind::Dir => 0,
            })
            .collect();
        for index in (1..self.nodes.len()).rev() {
            if let Some(parent) = self.nodes[index].parent {
                sizes[parent] += sizes[index];
            }
        }
        sizes
    }

    fn render(&self, node: usize, depth: usize, sizes: &[u64], out: &mut String) {
        let entry = &self.nodes[node];
        let kind = match entry.kind {
            NodeKind::Dir => "dir",
            NodeKind::File(_) => "file",
        };
        let _ = writeln!(
            out,
            "{:indent$}- {} ({}, size={})",
            "",
            entry.name,
            kind,
            sizes[node],
            indent = depth * 2
        );
        for &child in &entry.children {
            self.render(child, depth + 1, sizes, out);
        }
    }
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2022, day = 7)]
pub struct Day07 {
    tree: FileTree,
    sizes: Vec<u64>,
    out: OutputSink,
}

impl Day07 {
    fn dir_sizes(&self) -> impl Iterator<Item = u64> + '_ {
        self.tree
            .nodes
            .iter()
            .zip(&self.sizes)
            .filter(|(node, _)| node.kind == NodeKind::Dir)
            .map(|(_, &size)| size)
    }
}

impl Solver for Day07 {
    fn new(input: &str, out: OutputSink) -> Result<Self, ParseError> {
        let tree = FileTree::parse(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))?;
        let sizes = tree.sizes();
        Ok(Self { tree, sizes, out })
    }

    fn part1(&mut self) -> Result<String, SolveError> {
        if !self.out.is_null() {
            let mut rendered = String::new();
            self.tree
                .render(FileTree::ROOT, 0, &self.sizes, &mut rendered);
            self.out.write_all(rendered.as_bytes())?;
        }

        let total: u64 = self.dir_sizes().filter(|&s| s <= SMALL_DIR_LIMIT).sum();
        Ok(total.to_string())
    }

    fn part2(&mut self) -> Result<String, SolveError> {
        let used = self.sizes[FileTree::ROOT];
        let to_free = NEEDED_FREE.saturating_sub(DISK_SIZE.saturating_sub(used));

        self.dir_sizes()
            .filter(|&s| s >= to_free)
            .min()
            .map(|s| s.to_string())
            .ok_or_else(|| SolveError::Failed(format!("no directory frees {} bytes", to_free)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const EXAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_example() {
        let mut solver = Day07::new(EXAMPLE, OutputSink::null()).unwrap();
        assert_eq!(solver.part1().unwrap(), "95437");
        assert_eq!(solver.part2().unwrap(), "24933642");
    }

    #[test]
    fn test_arena_parent_links() {
        let tree = FileTree::parse(EXAMPLE).unwrap();
        let a = tree.child(FileTree::ROOT, "a").unwrap();
        let e = tree.child(a, "e").unwrap();

        assert_eq!(tree.nodes[e].parent, Some(a));
        assert_eq!(tree.nodes[a].parent, Some(FileTree::ROOT));
        assert!(tree.nodes.iter().skip(1).all(|n| n.parent.is_some()));

        let sizes = tree.sizes();
        assert_eq!(sizes[e], 584);
        assert_eq!(sizes[a], 94853);
        assert_eq!(sizes[FileTree::ROOT], 48381165);
    }

    #[test]
    fn test_repeated_ls_is_not_double_counted() {
        let input = format!("{}$ cd /\n$ ls\ndir a\n14848514 b.txt\n", EXAMPLE);
        let mut solver = Day07::new(&input, OutputSink::null()).unwrap();
        assert_eq!(solver.part1().unwrap(), "95437");
    }

    #[test]
    fn test_part1_renders_tree_to_output() {
        let captured = Captured::default();
        let mut solver = Day07::new(EXAMPLE, OutputSink::new(captured.clone())).unwrap();
        solver.part1().unwrap();

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "- / (dir, size=48381165)");
        assert_eq!(lines[1], "  - a (dir, size=94853)");
        assert_eq!(lines[2], "    - e (dir, size=584)");
        assert_eq!(lines[3], "      - i (file, size=584)");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Day07::new("$ cd ..\n", OutputSink::null()),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Day07::new("$ rm -rf /\n", OutputSink::null()),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Day07::new("$ ls\nbig file.txt\n", OutputSink::null()),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
