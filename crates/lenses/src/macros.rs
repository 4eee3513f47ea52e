//! Lens declaration macros.

#[doc(hidden)]
#[macro_export]
macro_rules! __lens_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}

/// Declares a [`LensDef`](crate::LensDef) value.
///
/// The first argument is the lens id (also the default route segment under
/// `/lenses/`). Optional fields default to: `path` derived from the id,
/// `keywords` empty, `sidebar`/`palette` true, no absorption, no tab label.
#[macro_export]
macro_rules! lens {
	($id:ident, {
		name: $lens_name:expr,
		description: $description:expr,
		icon: $icon:expr,
		category: $category:ident,
		order: $order:expr
		$(, path: $path:expr)?
		$(, keywords: [$($kw:expr),* $(,)?])?
		$(, sidebar: $sidebar:expr)?
		$(, palette: $palette:expr)?
		$(, core_lens: $core:ident)?
		$(, tab_label: $tab:expr)?
		$(,)?
	}) => {
		$crate::LensDef {
			id: stringify!($id),
			name: $lens_name,
			description: $description,
			icon: $icon,
			category: $crate::LensCategory::$category,
			show_in_sidebar: $crate::__lens_opt!($({$sidebar})?, true),
			show_in_command_palette: $crate::__lens_opt!($({$palette})?, true),
			path: $crate::__lens_opt!($({$path})?, concat!("/lenses/", stringify!($id))),
			order: $order,
			keywords: $crate::__lens_opt!($({&[$($kw),*]})?, &[]),
			core_lens: $crate::__lens_opt!($({Some($crate::CoreLensId::$core)})?, None),
			tab_label: $crate::__lens_opt!($({Some($tab)})?, None),
		}
	};
}
