use super::tree::HuffmanNode;
use super::CodingError;

/// Array-backed binary min-heap of tree nodes, ordered by weight.
///
/// Nodes are moved into and out of the heap by value; a node returned by
/// [`NodeHeap::extract_min`] is no longer part of the heap. The capacity is
/// fixed when the heap is created and matches the number of distinct
/// symbols; the merge loop only ever shrinks the heap, so the capacity is
/// never exceeded.
pub struct NodeHeap {
    nodes: Vec<HuffmanNode>,
    capacity: usize,
}

impl NodeHeap {
    pub fn with_capacity(capacity: usize) -> Result<NodeHeap, CodingError> {
        if capacity == 0 {
            return Err(CodingError::ZeroHeapCapacity);
        }
        Ok(NodeHeap {
            nodes: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Bulk-loads `leaves` and establishes the heap property with a
    /// bottom-up sift-down pass, O(n) instead of n repeated inserts.
    /// The input order is kept as the pre-heapify layout, so construction
    /// is reproducible for a fixed symbol discovery order.
    pub fn from_leaves(leaves: Vec<HuffmanNode>) -> Result<NodeHeap, CodingError> {
        if leaves.is_empty() {
            return Err(CodingError::ZeroHeapCapacity);
        }
        let mut heap = NodeHeap {
            capacity: leaves.len(),
            nodes: leaves,
        };
        for index in (0..heap.nodes.len() / 2).rev() {
            heap.sift_down(index);
        }
        Ok(heap)
    }

    pub fn insert(&mut self, node: HuffmanNode) {
        debug_assert!(
            self.nodes.len() < self.capacity,
            "node heap grew past its fixed capacity of {}",
            self.capacity
        );
        self.nodes.push(node);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Removes and returns the lowest-weight node: the root is swapped with
    /// the last element, the heap shrinks by one, and the new root is sifted
    /// down towards the leaves.
    pub fn extract_min(&mut self) -> Result<HuffmanNode, CodingError> {
        if self.nodes.is_empty() {
            return Err(CodingError::ExtractFromEmptyHeap);
        }
        let minimum = self.nodes.swap_remove(0);
        self.sift_down(0);
        Ok(minimum)
    }

    pub fn is_size_one(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // Both sift directions compare with strict less-than. Equal-weight nodes
    // never swap, which keeps the element order deterministic for a fixed
    // insertion sequence.
    fn sift_up(&mut self, start_index: usize) {
        let mut index = start_index;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.nodes[index].weight() < self.nodes[parent].weight() {
                self.nodes.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, start_index: usize) {
        let mut index = start_index;
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;
            if left < self.nodes.len() && self.nodes[left].weight() < self.nodes[smallest].weight()
            {
                smallest = left;
            }
            if right < self.nodes.len()
                && self.nodes[right].weight() < self.nodes[smallest].weight()
            {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.nodes.swap(index, smallest);
            index = smallest;
        }
    }
}

#[cfg(test)]
mod test {
    use super::super::tree::HuffmanNode;
    use super::super::CodingError;
    use super::NodeHeap;

    fn leaves_from_weights(weights: &[u64]) -> Vec<HuffmanNode> {
        weights
            .iter()
            .enumerate()
            .map(|(index, &weight)| HuffmanNode::leaf(index as u8, weight))
            .collect()
    }

    fn assert_heap_property(heap: &NodeHeap) {
        for index in 1..heap.nodes.len() {
            let parent = (index - 1) / 2;
            assert!(
                heap.nodes[parent].weight() <= heap.nodes[index].weight(),
                "Heap property violated between parent {} and child {}",
                parent,
                index
            );
        }
    }

    #[test]
    fn test_from_leaves_establishes_heap_property() {
        let leaves = leaves_from_weights(&[45, 13, 12, 16, 9, 5]);
        let heap = NodeHeap::from_leaves(leaves).unwrap();
        assert_eq!(heap.len(), 6);
        assert_eq!(heap.capacity(), 6);
        assert_heap_property(&heap);
    }

    #[test]
    fn test_extract_min_yields_weights_in_ascending_order() {
        let leaves = leaves_from_weights(&[18, 3, 12, 3, 17, 12, 13]);
        let mut heap = NodeHeap::from_leaves(leaves).unwrap();
        let mut extracted = Vec::new();
        while !heap.is_empty() {
            extracted.push(heap.extract_min().unwrap().weight());
            assert_heap_property(&heap);
        }
        assert_eq!(extracted, vec![3, 3, 12, 12, 13, 17, 18]);
    }

    #[test]
    fn test_insert_restores_heap_property() {
        let mut heap = NodeHeap::with_capacity(4).unwrap();
        assert_eq!(heap.capacity(), 4);
        heap.insert(HuffmanNode::leaf(b'a', 7));
        heap.insert(HuffmanNode::leaf(b'b', 2));
        heap.insert(HuffmanNode::leaf(b'c', 5));
        heap.insert(HuffmanNode::leaf(b'd', 1));
        assert_heap_property(&heap);
        assert_eq!(heap.extract_min().unwrap().weight(), 1);
        assert_eq!(heap.extract_min().unwrap().weight(), 2);
    }

    #[test]
    fn test_extract_min_from_empty_heap_fails() {
        let mut heap = NodeHeap::with_capacity(3).unwrap();
        let result = heap.extract_min();
        assert!(matches!(result, Err(CodingError::ExtractFromEmptyHeap)));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(matches!(
            NodeHeap::with_capacity(0),
            Err(CodingError::ZeroHeapCapacity)
        ));
        assert!(matches!(
            NodeHeap::from_leaves(Vec::new()),
            Err(CodingError::ZeroHeapCapacity)
        ));
    }

    #[test]
    fn test_is_size_one_flips_exactly_at_one_element() {
        let mut heap = NodeHeap::from_leaves(leaves_from_weights(&[4, 9])).unwrap();
        assert!(!heap.is_size_one());
        heap.extract_min().unwrap();
        assert!(heap.is_size_one());
        heap.extract_min().unwrap();
        assert!(!heap.is_size_one());
    }

    #[test]
    fn test_equal_weights_preserve_initial_order() {
        // all weights equal: strict comparisons never swap, so extraction
        // follows the swap_remove pattern over the untouched input layout
        let leaves = leaves_from_weights(&[4, 4, 4]);
        let mut heap = NodeHeap::from_leaves(leaves).unwrap();
        let first = heap.extract_min().unwrap();
        assert_eq!(first, HuffmanNode::leaf(0, 4));
    }
}
