//! Builder support for nested element content.
//!
//! Containers accept any [`IntoElements`] value: a single element, a
//! `Vec`, a tuple of differently typed elements, an `Option`, a
//! [`Branch`], or any nesting of those. [`flat_unwrap`] normalises such a
//! value into one flat sequence whose order is the depth-first,
//! left-to-right order of the original expression.
//!
//! [`ElementList`]: crate::ElementList

use crate::element::{AnyElement, Element};

/// Conversion of builder content into a sequence of elements.
///
/// The returned sequence may still contain sequence elements such as
/// [`ElementList`](crate::ElementList); use [`flat_unwrap`] to get a flat sequence.
pub trait IntoElements {
	/// Converts self into a sequence of boxed elements.
	fn into_elements(self) -> Vec<AnyElement>;
}

impl<E> IntoElements for E
where
	E: Element + Clone + 'static,
{
	fn into_elements(self) -> Vec<AnyElement> {
		vec![Box::new(self)]
	}
}

impl IntoElements for AnyElement {
	fn into_elements(self) -> Vec<AnyElement> {
		vec![self]
	}
}

impl<T: IntoElements> IntoElements for Vec<T> {
	fn into_elements(self) -> Vec<AnyElement> {
		self.into_iter().flat_map(IntoElements::into_elements).collect()
	}
}

impl<T: IntoElements> IntoElements for Option<T> {
	fn into_elements(self) -> Vec<AnyElement> {
		match self {
			Some(content) => content.into_elements(),
			None => Vec::new(),
		}
	}
}

impl IntoElements for () {
	fn into_elements(self) -> Vec<AnyElement> {
		Vec::new()
	}
}

macro_rules! impl_into_elements_for_tuple {
	($($name:ident),+) => {
		impl<$($name: IntoElements),+> IntoElements for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_elements(self) -> Vec<AnyElement> {
				let ($($name,)+) = self;
				let mut elements = Vec::new();
				$(elements.extend($name.into_elements());)+
				elements
			}
		}
	};
}

impl_into_elements_for_tuple!(A);
impl_into_elements_for_tuple!(A, B);
impl_into_elements_for_tuple!(A, B, C);
impl_into_elements_for_tuple!(A, B, C, D);
impl_into_elements_for_tuple!(A, B, C, D, E);
impl_into_elements_for_tuple!(A, B, C, D, E, F);
impl_into_elements_for_tuple!(A, B, C, D, E, F, G);
impl_into_elements_for_tuple!(A, B, C, D, E, F, G, H);

/// Content chosen by a two-way condition whose arms have different types.
///
/// # Example
///
/// ```ignore
/// let content = if compact {
///     Branch::First(Text::new("short"))
/// } else {
///     Branch::Second(vec![Text::new("long"), Text::new("form")])
/// };
/// ```
#[derive(Debug, Clone)]
pub enum Branch<A, B> {
	/// Content of the first arm
	First(A),
	/// Content of the second arm
	Second(B),
}

impl<A: IntoElements, B: IntoElements> IntoElements for Branch<A, B> {
	fn into_elements(self) -> Vec<AnyElement> {
		match self {
			Branch::First(content) => content.into_elements(),
			Branch::Second(content) => content.into_elements(),
		}
	}
}

/// Normalises builder content into one flat, ordered sequence.
///
/// Sequence elements are expanded in place, however deeply nested; empty
/// sequences contribute nothing. Applying it to an already flat sequence
/// returns the same sequence.
pub fn flat_unwrap(content: impl IntoElements) -> Vec<AnyElement> {
	let mut flat = Vec::new();
	for element in content.into_elements() {
		unwrap_into(element, &mut flat);
	}
	flat
}

fn unwrap_into(mut element: AnyElement, flat: &mut Vec<AnyElement>) {
	match element.take_group() {
		Some(members) => {
			for member in members {
				unwrap_into(member, flat);
			}
		}
		None => flat.push(element),
	}
}

/// Builds an [`ElementList`](crate::ElementList) from heterogeneous builder content.
///
/// ```ignore
/// let list = elements![title, vec![first, second], maybe_footer];
/// ```
#[macro_export]
macro_rules! elements {
	() => {
		$crate::ElementList::new()
	};
	($($content:expr),+ $(,)?) => {{
		let mut list = $crate::ElementList::new();
		$(list.push($content);)+
		list
	}};
}
