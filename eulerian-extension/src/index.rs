use num_traits::{NumCast, PrimInt, ToPrimitive};
use std::hash::Hash;

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A valid node index.
pub struct NodeIndex<IndexType: Sized>(IndexType);
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A valid edge index.
pub struct EdgeIndex<IndexType: Sized>(IndexType);

/// A valid graph index.
///
/// Indices are consecutive, so they can be used to address vectors of per-node or per-edge data.
pub trait GraphIndex:
    std::fmt::Debug + Eq + Ord + Hash + Copy + Sized + From<usize> + std::ops::Add<usize, Output = Self>
{
    // No `Into<usize>`, so that indices are not accidentally converted into a different kind of index.
    /// Get this index as `usize`.
    fn as_usize(self) -> usize;
}

macro_rules! impl_graph_index {
    ($GraphIndexType:ident) => {
        impl<IndexType: PrimInt + Hash> GraphIndex for $GraphIndexType<IndexType> {
            fn as_usize(self) -> usize {
                <usize as NumCast>::from(self.0).unwrap()
            }
        }

        impl<IndexType: PrimInt + Hash> std::fmt::Debug for $GraphIndexType<IndexType> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_usize())
            }
        }

        impl<IndexType: PrimInt> From<usize> for $GraphIndexType<IndexType> {
            fn from(source: usize) -> Self {
                let source = <IndexType as NumCast>::from(source).unwrap();
                debug_assert!(source != IndexType::max_value());
                Self(source)
            }
        }

        impl<IndexType: PrimInt + Hash> std::ops::Add<usize> for $GraphIndexType<IndexType> {
            type Output = Self;

            fn add(self, rhs: usize) -> Self::Output {
                Self::from(self.as_usize() + rhs)
            }
        }

        impl<T, IndexType: PrimInt + Hash> std::ops::Index<$GraphIndexType<IndexType>> for Vec<T> {
            type Output = T;

            fn index(&self, index: $GraphIndexType<IndexType>) -> &Self::Output {
                &self[index.as_usize()]
            }
        }

        impl<T, IndexType: PrimInt + Hash> std::ops::IndexMut<$GraphIndexType<IndexType>>
            for Vec<T>
        {
            fn index_mut(&mut self, index: $GraphIndexType<IndexType>) -> &mut Self::Output {
                &mut self[index.as_usize()]
            }
        }
    };
}

impl_graph_index!(NodeIndex);
impl_graph_index!(EdgeIndex);

/// An iterator over a consecutive sequence of graph indices.
pub struct GraphIndices<IndexType> {
    start: IndexType,
    end: IndexType,
}

impl<RawType: ToPrimitive, IndexType: GraphIndex> From<(RawType, RawType)>
    for GraphIndices<IndexType>
{
    fn from(raw: (RawType, RawType)) -> Self {
        Self {
            start: IndexType::from(raw.0.to_usize().unwrap()),
            end: IndexType::from(raw.1.to_usize().unwrap()),
        }
    }
}

impl<IndexType: GraphIndex> Iterator for GraphIndices<IndexType> {
    type Item = IndexType;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            let result = Some(self.start);
            self.start = self.start + 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.as_usize() - self.start.as_usize();
        (remaining, Some(remaining))
    }
}

impl<IndexType: GraphIndex> ExactSizeIterator for GraphIndices<IndexType> {}

#[cfg(test)]
mod tests {
    use super::{GraphIndex, GraphIndices, NodeIndex};

    #[test]
    fn test_graph_indices_are_consecutive() {
        let indices: Vec<NodeIndex<usize>> = GraphIndices::from((2usize, 5usize)).collect();
        assert_eq!(indices, vec![2.into(), 3.into(), 4.into()]);
        assert_eq!(indices[1].as_usize(), 3);
    }

    #[test]
    fn test_graph_indices_empty_range() {
        let mut indices: GraphIndices<NodeIndex<usize>> = GraphIndices::from((0usize, 0usize));
        assert_eq!(indices.len(), 0);
        assert_eq!(indices.next(), None);
    }

    #[test]
    fn test_vec_is_indexable_by_node_index() {
        let mut values = vec![0, 0, 0];
        let index: NodeIndex<usize> = 1.into();
        values[index] += 7;
        assert_eq!(values[index], 7);
        assert_eq!(values, vec![0, 7, 0]);
    }
}
