use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag identifying the element layout of a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DescriptionType {
    /// Packed bits compared with Hamming distance
    Binary,
    /// Dense `f64` vector
    F64,
}

impl fmt::Display for DescriptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptionType::Binary => write!(f, "binary"),
            DescriptionType::F64 => write!(f, "f64"),
        }
    }
}

/// Fixed-shape descriptor vector
pub trait TupleDesc: Clone + fmt::Debug + Send + Sync + 'static {
    const TYPE: DescriptionType;

    /// Number of elements (bits for binary descriptors)
    fn size(&self) -> usize;
}

/// Binary descriptor stored as packed 32-bit words
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryDesc {
    num_bits: usize,
    data: Vec<u32>,
}

impl BinaryDesc {
    pub fn new(num_bits: usize) -> Self {
        Self {
            num_bits,
            data: vec![0; num_bits.div_ceil(32)],
        }
    }

    pub fn is_bit_true(&self, bit: usize) -> bool {
        (self.data[bit / 32] >> (bit % 32)) & 1 == 1
    }

    pub fn set_bit(&mut self, bit: usize, value: bool) {
        let mask = 1u32 << (bit % 32);
        if value {
            self.data[bit / 32] |= mask;
        } else {
            self.data[bit / 32] &= !mask;
        }
    }

    pub fn words(&self) -> &[u32] {
        &self.data
    }

    /// Number of differing bits
    pub fn hamming(&self, other: &BinaryDesc) -> u32 {
        self.data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}

impl TupleDesc for BinaryDesc {
    const TYPE: DescriptionType = DescriptionType::Binary;

    fn size(&self) -> usize {
        self.num_bits
    }
}

/// Dense floating point descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct F64Desc {
    pub value: Vec<f64>,
}

impl F64Desc {
    pub fn new(len: usize) -> Self {
        Self { value: vec![0.0; len] }
    }

    pub fn euclidean_sq(&self, other: &F64Desc) -> f64 {
        self.value
            .iter()
            .zip(&other.value)
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }

    /// Normalized cross correlation, assuming both inputs are already normalized
    pub fn correlation(&self, other: &F64Desc) -> f64 {
        self.value.iter().zip(&other.value).map(|(a, b)| a * b).sum()
    }
}

impl TupleDesc for F64Desc {
    const TYPE: DescriptionType = DescriptionType::F64;

    fn size(&self) -> usize {
        self.value.len()
    }
}
