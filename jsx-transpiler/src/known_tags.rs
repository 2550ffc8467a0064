//! The fixed vocabulary of "known" tag names.
//!
//! In [`LoweringMode::Targeted`](crate::LoweringMode::Targeted), a tag
//! found here resolves against the DOM target (`React.DOM.div`); anything
//! else is treated as a component. The list covers HTML, SVG and MathML
//! element names. Custom elements (`x-foo`) are never known.

/// Returns whether `tag_name` is part of the standard markup vocabulary.
pub fn is_known_tag(tag_name: &str) -> bool {
	is_html_tag(tag_name) || is_svg_tag(tag_name) || is_mathml_tag(tag_name)
}

/// HTML element names.
fn is_html_tag(tag_name: &str) -> bool {
	matches!(
		tag_name,
		"a" | "abbr"
			| "address"
			| "area"
			| "article"
			| "aside"
			| "audio"
			| "b"
			| "base"
			| "bdi"
			| "bdo"
			| "big"
			| "blockquote"
			| "body"
			| "br"
			| "button"
			| "canvas"
			| "caption"
			| "cite"
			| "code"
			| "col"
			| "colgroup"
			| "data"
			| "datalist"
			| "dd"
			| "del"
			| "details"
			| "dfn"
			| "dialog"
			| "div"
			| "dl"
			| "dt"
			| "em"
			| "embed"
			| "fieldset"
			| "figcaption"
			| "figure"
			| "footer"
			| "form"
			| "h1" | "h2"
			| "h3" | "h4"
			| "h5" | "h6"
			| "head"
			| "header"
			| "hgroup"
			| "hr"
			| "html"
			| "i"
			| "iframe"
			| "img"
			| "input"
			| "ins"
			| "kbd"
			| "keygen"
			| "label"
			| "legend"
			| "li"
			| "link"
			| "main"
			| "map"
			| "mark"
			| "menu"
			| "menuitem"
			| "meta"
			| "meter"
			| "nav"
			| "noscript"
			| "object"
			| "ol"
			| "optgroup"
			| "option"
			| "output"
			| "p"
			| "param"
			| "picture"
			| "pre"
			| "progress"
			| "q"
			| "rp"
			| "rt"
			| "ruby"
			| "s"
			| "samp"
			| "search"
			| "section"
			| "select"
			| "slot"
			| "small"
			| "source"
			| "span"
			| "strong"
			| "sub"
			| "summary"
			| "sup"
			| "table"
			| "tbody"
			| "td"
			| "template"
			| "textarea"
			| "tfoot"
			| "th"
			| "thead"
			| "time"
			| "tr"
			| "track"
			| "u"
			| "ul"
			| "var"
			| "video"
			| "wbr"
	)
}

/// SVG element names. `script`, `style` and `title` are shared with HTML.
fn is_svg_tag(tag_name: &str) -> bool {
	matches!(
		tag_name,
		"animate"
			| "animateMotion"
			| "animateTransform"
			| "circle"
			| "clipPath"
			| "defs"
			| "desc"
			| "ellipse"
			| "feBlend"
			| "feColorMatrix"
			| "feComponentTransfer"
			| "feComposite"
			| "feConvolveMatrix"
			| "feDiffuseLighting"
			| "feDisplacementMap"
			| "feDistantLight"
			| "feDropShadow"
			| "feFlood"
			| "feFuncA"
			| "feFuncB"
			| "feFuncG"
			| "feFuncR"
			| "feGaussianBlur"
			| "feImage"
			| "feMerge"
			| "feMergeNode"
			| "feMorphology"
			| "feOffset"
			| "fePointLight"
			| "feSpecularLighting"
			| "feSpotLight"
			| "feTile"
			| "feTurbulence"
			| "filter"
			| "foreignObject"
			| "g"
			| "image"
			| "line"
			| "linearGradient"
			| "marker"
			| "mask"
			| "metadata"
			| "mpath"
			| "path"
			| "pattern"
			| "polygon"
			| "polyline"
			| "radialGradient"
			| "rect"
			| "script"
			| "set"
			| "stop"
			| "style"
			| "svg"
			| "switch"
			| "symbol"
			| "text"
			| "textPath"
			| "title"
			| "tspan"
			| "use"
			| "view"
	)
}

/// MathML element names.
fn is_mathml_tag(tag_name: &str) -> bool {
	matches!(
		tag_name,
		"math"
			| "maction"
			| "annotation"
			| "annotation-xml"
			| "menclose"
			| "merror"
			| "mfenced"
			| "mfrac"
			| "mi" | "mmultiscripts"
			| "mn" | "mo"
			| "mover"
			| "mpadded"
			| "mphantom"
			| "mprescripts"
			| "mroot"
			| "mrow"
			| "ms" | "semantics"
			| "mspace"
			| "msqrt"
			| "mstyle"
			| "msub"
			| "msup"
			| "msubsup"
			| "mtable"
			| "mtd"
			| "mtext"
			| "mtr"
			| "munder"
			| "munderover"
	)
}
