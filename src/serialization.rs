use std::marker::PhantomData;

use serde::{de::Visitor, ser::SerializeSeq, Deserialize, Deserializer, Serialize};

use crate::bool_matrix::BoolMatrix;
use crate::vector::{Lane, Vector};

impl<T: Lane + Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(N))?;
        for lane in self.iter() {
            seq.serialize_element(lane)?;
        }
        seq.end()
    }
}

struct RowArr<'a, const C: usize>(&'a [bool; C]);

impl<'a, const C: usize> Serialize for RowArr<'a, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(C))?;
        for el in self.0.iter() {
            seq.serialize_element(el)?;
        }
        seq.end()
    }
}

/// Serialized row-major, as nested sequences: `[[row 0], [row 1], ...]`.
impl<const R: usize, const C: usize> Serialize for BoolMatrix<R, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let rows = self.to_rows();
        let mut seq = serializer.serialize_seq(Some(R))?;
        for row in rows.iter() {
            seq.serialize_element(&RowArr(row))?;
        }
        seq.end()
    }
}

struct VectorVisitor<T: Lane, const N: usize> {
    marker: PhantomData<T>,
}

impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
where
    T: Lane + Deserialize<'de>,
{
    type Value = Vector<T, N>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a sequence of exactly {} {} lanes", N, T::TYPE_NAME)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut lanes = Vec::with_capacity(N);
        while let Some(lane) = seq.next_element::<T>()? {
            lanes.push(lane);
        }
        if lanes.len() != N {
            return Err(serde::de::Error::invalid_length(lanes.len(), &self));
        }
        Ok(Vector::from_fn(|i| lanes[i]))
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
where
    T: Lane + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Vector<T, N>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(VectorVisitor::<T, N> {
            marker: PhantomData,
        })
    }
}

struct BoolMatrixVisitor<const R: usize, const C: usize>;

impl<'de, const R: usize, const C: usize> Visitor<'de> for BoolMatrixVisitor<R, C> {
    type Value = BoolMatrix<R, C>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            formatter,
            "a row-major {}x{} matrix of booleans given as nested sequences",
            R, C
        )
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut rows = Vec::with_capacity(R);
        while let Some(row) = seq.next_element::<Vec<bool>>()? {
            if row.len() != C {
                return Err(serde::de::Error::custom(format!(
                    "invalid number of columns in matrix: expected {}, found {}",
                    C,
                    row.len()
                )));
            }
            rows.push(row);
        }
        if rows.len() != R {
            return Err(serde::de::Error::custom(format!(
                "invalid number of rows in matrix: expected {}, found {}",
                R,
                rows.len()
            )));
        }
        Ok(BoolMatrix::from_fn(|row, col| rows[row][col]))
    }
}

impl<'de, const R: usize, const C: usize> Deserialize<'de> for BoolMatrix<R, C> {
    fn deserialize<D>(deserializer: D) -> Result<BoolMatrix<R, C>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(BoolMatrixVisitor::<R, C>)
    }
}
