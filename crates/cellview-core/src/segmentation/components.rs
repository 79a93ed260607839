use std::collections::HashMap;

use ndarray::Array2;

/// Size of one labeled region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentStats {
    pub label: u32,
    pub area: usize,
}

/// Label 4-connected foreground regions with two-pass union-find.
///
/// Labels are 1..=n in raster order of each region's first pixel; 0 is
/// background. Stats are indexed by `label - 1`.
pub fn label_components(mask: &Array2<bool>) -> (Array2<u32>, Vec<ComponentStats>) {
    let (h, w) = mask.dim();
    let mut labels = Array2::<u32>::zeros((h, w));
    if h == 0 || w == 0 {
        return (labels, Vec::new());
    }

    // Index 0 unused; provisional labels start at 1.
    let mut parent: Vec<u32> = vec![0];

    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }
            let up = if row > 0 { labels[[row - 1, col]] } else { 0 };
            let left = if col > 0 { labels[[row, col - 1]] } else { 0 };

            labels[[row, col]] = match (up > 0, left > 0) {
                (false, false) => {
                    let next = parent.len() as u32;
                    parent.push(next);
                    next
                }
                (true, false) => up,
                (false, true) => left,
                (true, true) => {
                    if up != left {
                        union(&mut parent, up, left);
                    }
                    up.min(left)
                }
            };
        }
    }

    let mut final_label = HashMap::<u32, u32>::new();
    let mut stats: Vec<ComponentStats> = Vec::new();
    for lbl in labels.iter_mut() {
        if *lbl == 0 {
            continue;
        }
        let root = find(&parent, *lbl);
        let id = *final_label.entry(root).or_insert_with(|| {
            stats.push(ComponentStats {
                label: stats.len() as u32 + 1,
                area: 0,
            });
            stats.len() as u32
        });
        stats[id as usize - 1].area += 1;
        *lbl = id;
    }

    (labels, stats)
}

/// Drop components below `min_area` and renumber the rest 1..=n.
pub fn remove_small(
    labels: &Array2<u32>,
    stats: &[ComponentStats],
    min_area: usize,
) -> (Array2<u32>, Vec<ComponentStats>) {
    let mut remap = vec![0u32; stats.len() + 1];
    let mut kept = Vec::new();
    for s in stats.iter().filter(|s| s.area >= min_area) {
        let id = kept.len() as u32 + 1;
        remap[s.label as usize] = id;
        kept.push(ComponentStats {
            label: id,
            area: s.area,
        });
    }
    (labels.mapv(|l| remap[l as usize]), kept)
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
