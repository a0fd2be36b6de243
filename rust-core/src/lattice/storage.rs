use std::marker::PhantomData;

use anyhow::{Error, bail};
use log::debug;

use crate::interfaces::PerLevelOrder;
use crate::lattice::compression::Compression;
use crate::lattice::ring::LatticeRing;
use crate::lattice::size_param::SizeParam;

/// Flat storage for vectors indexed by the points of a lattice rule.
///
/// The vector elements are not permuted but compression `C` is applied to the
/// vector indices. Copies are cheap: the only state is the size parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Storage<L: LatticeRing, C: Compression> {
    size_param: SizeParam<L>,
    _compression: PhantomData<C>,
}

impl<L: LatticeRing, C: Compression> Storage<L, C> {
    /// Construct flat storage with the basic per-level order.
    pub fn new(size_param: SizeParam<L>) -> Self {
        debug!(
            "Creating {} for a {} lattice with {} points ({} compression)",
            Self::short_name(),
            L::KIND,
            size_param.num_points(),
            C::TAG
        );
        Storage {
            size_param,
            _compression: PhantomData,
        }
    }

    /// Construct flat storage, rejecting per-level orders that only make sense for embedded layouts.
    pub fn with_order(size_param: SizeParam<L>, order: PerLevelOrder) -> Result<Self, Error> {
        if order == PerLevelOrder::Cyclic {
            bail!(
                "Cannot instantiate {} with the cyclic per-level order",
                Self::short_name()
            );
        }
        Ok(Self::new(size_param))
    }

    pub fn short_name() -> &'static str {
        "flat storage"
    }

    pub fn size_param(&self) -> &SizeParam<L> {
        &self.size_param
    }

    /// Number of points of the lattice, ignoring compression.
    pub fn num_points(&self) -> u64 {
        self.size_param.num_points()
    }

    /// Number of distinct compressed indices.
    pub fn virtual_size(&self) -> u64 {
        C::size(self.num_points())
    }

    /// Merit values of flat storage are plain reals.
    pub fn create_merit_value(&self, value: f64) -> f64 {
        value
    }

    pub fn unpermute(&self) -> Unpermute<L, C> {
        Unpermute::new(self.clone())
    }

    pub fn stride(&self, stride: L::Element) -> Stride<L, C> {
        Stride::new(self.clone(), stride)
    }
}

/// Identity mapping of indices, followed by compression.
#[derive(Debug, Clone)]
pub struct Unpermute<L: LatticeRing, C: Compression> {
    storage: Storage<L, C>,
}

impl<L: LatticeRing, C: Compression> Unpermute<L, C> {
    pub fn new(storage: Storage<L, C>) -> Self {
        Unpermute { storage }
    }

    /// Compressed index of raw index `i`; panics unless `i < num_points()`.
    #[inline]
    pub fn apply(&self, i: u64) -> u64 {
        check_index(i, self.storage.num_points());
        C::compress_index(i, self.storage.num_points())
    }

    /// Number of compressed values this view maps onto (see [`Stride::size`]).
    pub fn size(&self) -> u64 {
        self.storage.virtual_size()
    }

    pub fn num_points(&self) -> u64 {
        self.storage.num_points()
    }

    pub fn virtual_size(&self) -> u64 {
        self.storage.virtual_size()
    }

    pub fn storage(&self) -> &Storage<L, C> {
        &self.storage
    }

    /// Compressed indices of all raw indices, in raw order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.num_points()).map(move |i| self.apply(i))
    }
}

/// Stride permutation.
///
/// For integration lattices, a stride `a` maps index `i` to `a * i mod n`:
/// the `j`-th component of the strided vector `v` is `v_{j a mod n}`.
///
/// For polynomial lattices, index `i = sum a_l 2^l` is read as
/// `i(z) = sum a_l z^l` and mapped to `i(z) q(z) mod P(z)`, where `q(z)` is the
/// stride and `P(z)` the modulus.
///
/// The result is compressed afterwards.
#[derive(Debug, Clone)]
pub struct Stride<L: LatticeRing, C: Compression> {
    storage: Storage<L, C>,
    stride: L::Element,
}

impl<L: LatticeRing, C: Compression> Stride<L, C> {
    /// The stride is kept reduced modulo the lattice modulus.
    pub fn new(storage: Storage<L, C>, stride: L::Element) -> Self {
        let stride = L::reduce(&stride, storage.size_param().modulus());
        Stride { storage, stride }
    }

    /// Compressed index of the strided image of raw index `i`; panics unless `i < num_points()`.
    #[inline]
    pub fn apply(&self, i: u64) -> u64 {
        check_index(i, self.storage.num_points());
        let modulus = self.storage.size_param().modulus();
        let image = L::mul_mod(&self.stride, &L::from_index(i), modulus);
        C::compress_index(L::to_index(&image), self.storage.num_points())
    }

    /// Number of raw indices this view is defined on, unlike [`Unpermute::size`].
    pub fn size(&self) -> u64 {
        self.storage.num_points()
    }

    pub fn num_points(&self) -> u64 {
        self.storage.num_points()
    }

    pub fn virtual_size(&self) -> u64 {
        self.storage.virtual_size()
    }

    pub fn stride(&self) -> &L::Element {
        &self.stride
    }

    pub fn storage(&self) -> &Storage<L, C> {
        &self.storage
    }

    /// Compressed strided indices of all raw indices, in raw order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.num_points()).map(move |i| self.apply(i))
    }
}

#[inline]
fn check_index(i: u64, num_points: u64) {
    assert!(
        i < num_points,
        "Index {} out of range for a lattice with {} points",
        i,
        num_points
    );
}
