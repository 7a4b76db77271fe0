/// Implements [`Composite`](crate::Composite) and a list-style `Debug` for a dimension-generic
/// tuple struct wrapping `Vec<Item<N>>`.
#[macro_export]
macro_rules! impl_composite {
	($($t:ident, $i:ident),*) => {$(
		impl<const N: usize> $crate::Composite<$i<N>> for $t<N> {
			fn as_slice(&self) -> &[$i<N>] {
				&self.0
			}
			fn into_inner(self) -> Vec<$i<N>> {
				self.0
			}
		}

		impl<const N: usize> std::fmt::Debug for $t<N> {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_list().entries(&self.0).finish()
			}
		}
	)*}
}

/// Implements `Decode` for a dimension-generic tuple struct by decoding an array of `Item<N>`.
#[macro_export]
macro_rules! impl_decode_elements {
	($($t:ident, $i:ident),*) => {$(
		impl<const N: usize> $crate::Decode for $t<N>
		where
			$crate::Dim<N>: $crate::SupportedDim,
		{
			fn decode(value: &geostrict_core::json::JsonValue) -> Result<Self, $crate::DecodeError> {
				$crate::geo::types::decode_elements(value, <$i<N> as $crate::Decode>::decode).map(Self)
			}
		}
	)*}
}
