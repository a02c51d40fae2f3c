//! Class fields, accessors, parameters and interface members.

use modelgen_codegen::{is_blank, non_blank};
use modelgen_manifest::{Modifier, PropertyDef};

use super::Render;
use crate::RenderContext;

/// A typed field descriptor.
///
/// Renders in four shapes: a class member (plain field, or a private
/// backing field plus accessors), a constructor argument, a method
/// signature parameter, and an interface member.
///
/// Accessor mode is active when the property is tracked or carries a
/// custom getter or setter body. In that mode the declared field becomes
/// `private _name` and a getter/setter pair is emitted per the read and
/// write flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    ty: String,
    value: Option<String>,
    optional: bool,
    is_static: bool,
    read: bool,
    write: bool,
    declare: bool,
    modifier: Modifier,
    cloneable: bool,
    exportable: bool,
    undoable: bool,
    track: bool,
    track_state: bool,
    track_date: bool,
    getter_body: Option<String>,
    setter_body: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: "any".to_string(),
            value: None,
            optional: false,
            is_static: false,
            read: true,
            write: true,
            declare: true,
            modifier: Modifier::Public,
            cloneable: true,
            exportable: true,
            undoable: true,
            track: false,
            track_state: true,
            track_date: true,
            getter_body: None,
            setter_body: None,
        }
    }

    /// Set the type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = ty.into();
        self
    }

    /// Set the default value, pasted verbatim.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn readable(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn writable(mut self, write: bool) -> Self {
        self.write = write;
        self
    }

    /// Whether to emit the field (or backing field) declaration.
    pub fn declared(mut self, declare: bool) -> Self {
        self.declare = declare;
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn cloneable(mut self, cloneable: bool) -> Self {
        self.cloneable = cloneable;
        self
    }

    pub fn exportable(mut self, exportable: bool) -> Self {
        self.exportable = exportable;
        self
    }

    pub fn undoable(mut self, undoable: bool) -> Self {
        self.undoable = undoable;
        self
    }

    /// Enable change tracking in the synthesized setter.
    pub fn tracked(mut self) -> Self {
        self.track = true;
        self
    }

    pub fn track_state(mut self, track_state: bool) -> Self {
        self.track_state = track_state;
        self
    }

    pub fn track_date(mut self, track_date: bool) -> Self {
        self.track_date = track_date;
        self
    }

    /// Use a custom getter body.
    pub fn getter(mut self, body: impl Into<String>) -> Self {
        self.getter_body = Some(body.into());
        self
    }

    /// Use a custom setter body.
    pub fn setter(mut self, body: impl Into<String>) -> Self {
        self.setter_body = Some(body.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_cloneable(&self) -> bool {
        self.cloneable
    }

    pub fn is_exportable(&self) -> bool {
        self.exportable
    }

    pub fn is_undoable(&self) -> bool {
        self.undoable
    }

    pub fn is_tracked(&self) -> bool {
        self.track
    }

    /// Whether getter/setter synthesis is active.
    pub fn uses_accessors(&self) -> bool {
        self.track || non_blank(&self.getter_body).is_some() || non_blank(&self.setter_body).is_some()
    }

    fn default_value(&self) -> Option<&str> {
        non_blank(&self.value)
    }

    fn optional_mark(&self) -> &'static str {
        if self.optional { "?" } else { "" }
    }

    /// Render as a constructor argument: `name[?]: type[ = value]`.
    pub fn render_arg(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let sp = ctx.format().space();
        let value = self
            .default_value()
            .map(|v| format!("{sp}={sp}{v}"))
            .unwrap_or_default();
        format!("{}{}:{sp}{}{value}", self.name, self.optional_mark(), self.ty)
    }

    /// Render as a signature parameter: `name[?]: type`.
    pub fn render_param(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let sp = ctx.format().space();
        format!("{}{}:{sp}{}", self.name, self.optional_mark(), self.ty)
    }

    /// Render as an interface member: `name[?]: type;`.
    pub fn render_member(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let fmt = ctx.format();
        format!(
            "{}{}{}:{}{};",
            fmt.tab(),
            self.name,
            self.optional_mark(),
            fmt.space(),
            self.ty
        )
    }

    fn render_field(&self, ctx: &RenderContext, keyword: &str) -> String {
        let fmt = ctx.format();
        let sp = fmt.space();
        let plain = !self.uses_accessors() || (!self.read && !self.write);
        let (modifier, prefix) = if plain {
            (self.modifier.as_str(), "")
        } else {
            ("private", "_")
        };
        let value = self.default_value();
        let annotation = match value {
            Some(_) if ctx.infer_type() => String::new(),
            _ => format!(":{sp}{}", self.ty),
        };
        let value = value.map(|v| format!("{sp}={sp}{v}")).unwrap_or_default();
        format!(
            "{}{modifier}{keyword}{prefix}{}{annotation}{value};",
            fmt.tab(),
            self.name
        )
    }

    fn render_getter(&self, ctx: &RenderContext, keyword: &str) -> String {
        let fmt = ctx.format();
        let (sp, nl, tab) = (fmt.space(), fmt.newline(), fmt.tab());
        let body = match non_blank(&self.getter_body) {
            Some(body) => body.to_string(),
            None => format!("return this._{};", self.name),
        };
        format!(
            "{tab}{}{keyword}get {}():{sp}{}{sp}{{{nl}{}{body}{nl}{tab}}}",
            self.modifier,
            self.name,
            self.ty,
            fmt.indent(2)
        )
    }

    fn render_setter(&self, ctx: &RenderContext, keyword: &str) -> String {
        let fmt = ctx.format();
        let (sp, nl, tab) = (fmt.space(), fmt.newline(), fmt.tab());
        let inner = fmt.indent(2);
        let mut setter = format!(
            "{tab}{}{keyword}set {}(value:{sp}{}){sp}{{{nl}",
            self.modifier, self.name, self.ty
        );
        match non_blank(&self.setter_body) {
            Some(body) => setter.push_str(&format!("{inner}{body}{nl}")),
            None => {
                setter.push_str(&format!("{inner}this._{}{sp}={sp}value;{nl}", self.name));
                if self.track && self.track_state {
                    setter.push_str(&format!(
                        "{inner}this.{}{sp}={sp}true;{nl}",
                        ctx.dirty_field()
                    ));
                }
                if self.track && self.track_date {
                    setter.push_str(&format!(
                        "{inner}this.{}{sp}={sp}(new Date()).getTime();{nl}",
                        ctx.updated_field()
                    ));
                }
            }
        }
        setter.push_str(&format!("{tab}}}"));
        setter
    }
}

impl Render for Property {
    /// Render as a class member.
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let keyword = if self.is_static { " static " } else { " " };
        let mut parts = Vec::new();

        if self.declare {
            parts.push(self.render_field(ctx, keyword));
        }
        if self.uses_accessors() {
            if self.read {
                parts.push(self.render_getter(ctx, keyword));
            }
            if self.write {
                parts.push(self.render_setter(ctx, keyword));
            }
        }

        ctx.format().join(parts)
    }
}

impl From<&PropertyDef> for Property {
    fn from(def: &PropertyDef) -> Self {
        Self {
            name: def.name.clone(),
            ty: def.ty.clone(),
            value: def.value.clone(),
            optional: def.optional,
            is_static: def.is_static,
            read: def.read,
            write: def.write,
            declare: def.declare,
            modifier: def.modifier.clone(),
            cloneable: def.can_clone,
            exportable: def.can_export,
            undoable: def.can_undo,
            track: def.track,
            track_state: def.track_state,
            track_date: def.track_date,
            getter_body: def.getter_body.clone(),
            setter_body: def.setter_body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use modelgen_manifest::Options;

    use super::*;

    #[test]
    fn test_plain_field() {
        let p = Property::new("title").ty("string");
        assert_eq!(p.render(&RenderContext::pretty()), "    public title: string;");
        assert_eq!(p.render(&RenderContext::compact()), "public title:string;");
    }

    #[test]
    fn test_static_field_with_value() {
        let p = Property::new("count")
            .ty("number")
            .value("0")
            .static_()
            .modifier(Modifier::Protected);
        assert_eq!(
            p.render(&RenderContext::pretty()),
            "    protected static count: number = 0;"
        );
    }

    #[test]
    fn test_custom_modifier_verbatim() {
        let p = Property::new("id")
            .ty("number")
            .modifier(Modifier::Custom("public readonly".to_string()));
        assert_eq!(
            p.render(&RenderContext::pretty()),
            "    public readonly id: number;"
        );
    }

    #[test]
    fn test_blank_name_renders_nothing() {
        let ctx = RenderContext::pretty();
        let p = Property::new("  ").ty("string").tracked();
        assert_eq!(p.render(&ctx), "");
        assert_eq!(p.render_arg(&ctx), "");
        assert_eq!(p.render_param(&ctx), "");
        assert_eq!(p.render_member(&ctx), "");
    }

    #[test]
    fn test_tracked_setter() {
        let p = Property::new("name").ty("string").tracked();
        let expected = [
            "    private _name: string;",
            "    public get name(): string {",
            "        return this._name;",
            "    }",
            "    public set name(value: string) {",
            "        this._name = value;",
            "        this._isDirty = true;",
            "        this._lastUpdated = (new Date()).getTime();",
            "    }",
        ]
        .join("\n");
        assert_eq!(p.render(&RenderContext::pretty()), expected);
    }

    #[test]
    fn test_tracked_setter_custom_field_names() {
        let ctx = RenderContext::new(&Options {
            prettify: false,
            is_dirty: "isDirty".to_string(),
            last_updated: "lastUpdated".to_string(),
            ..Options::default()
        });
        let p = Property::new("name").ty("string").tracked();
        assert_eq!(
            p.render(&ctx),
            "private _name:string;\
             public get name():string{return this._name;}\
             public set name(value:string){this._name=value;this.isDirty=true;this.lastUpdated=(new Date()).getTime();}"
        );
    }

    #[test]
    fn test_tracked_setter_without_state_or_date() {
        let p = Property::new("n")
            .tracked()
            .track_state(false)
            .track_date(false);
        let out = p.render(&RenderContext::compact());
        assert!(out.contains("set n(value:any){this._n=value;}"));
        assert!(!out.contains("_isDirty"));
        assert!(!out.contains("_lastUpdated"));
    }

    #[test]
    fn test_untracked_setter_has_no_markers() {
        let p = Property::new("n").getter("return 1;");
        let out = p.render(&RenderContext::compact());
        assert_eq!(
            out,
            "private _n:any;public get n():any{return 1;}public set n(value:any){this._n=value;}"
        );
    }

    #[test]
    fn test_custom_setter_body() {
        let p = Property::new("age").ty("number").setter("this._age = Math.max(0, value);");
        let out = p.render(&RenderContext::compact());
        assert!(out.contains("set age(value:number){this._age = Math.max(0, value);}"));
    }

    #[test]
    fn test_read_only_accessor() {
        let p = Property::new("id").ty("string").tracked().writable(false);
        let out = p.render(&RenderContext::compact());
        assert!(out.contains("get id()"));
        assert!(!out.contains("set id("));
    }

    #[test]
    fn test_no_read_no_write_keeps_plain_field() {
        let p = Property::new("id")
            .tracked()
            .readable(false)
            .writable(false)
            .modifier(Modifier::Protected);
        assert_eq!(p.render(&RenderContext::compact()), "protected id:any;");
    }

    #[test]
    fn test_undeclared_accessors_only() {
        let p = Property::new("full").getter("return 'x';").writable(false).declared(false);
        assert_eq!(
            p.render(&RenderContext::compact()),
            "public get full():any{return 'x';}"
        );
    }

    #[test]
    fn test_uses_accessors() {
        assert!(!Property::new("a").uses_accessors());
        assert!(Property::new("a").tracked().uses_accessors());
        assert!(Property::new("a").getter("return 1;").uses_accessors());
        assert!(Property::new("a").setter("x();").uses_accessors());
        assert!(!Property::new("a").getter("  ").uses_accessors());
    }

    #[test]
    fn test_arg_forms() {
        let ctx = RenderContext::pretty();
        let p = Property::new("page").ty("number").value("1").optional();
        assert_eq!(p.render_arg(&ctx), "page?: number = 1");
        assert_eq!(p.render_param(&ctx), "page?: number");
        assert_eq!(p.render_member(&ctx), "    page?: number;");
        assert_eq!(p.render_arg(&RenderContext::compact()), "page?:number=1");
    }

    #[test]
    fn test_blank_value_is_absent() {
        let p = Property::new("a").ty("string").value("");
        assert_eq!(p.render(&RenderContext::compact()), "public a:string;");
        assert_eq!(p.render_arg(&RenderContext::compact()), "a:string");
    }

    #[test]
    fn test_infer_type_omits_annotation_with_value() {
        let ctx = RenderContext::new(&Options {
            infer_type: true,
            ..Options::default()
        });
        assert_eq!(
            Property::new("a").ty("number").value("1").render(&ctx),
            "    public a = 1;"
        );
        assert_eq!(
            Property::new("b").ty("number").render(&ctx),
            "    public b: number;"
        );
    }

    #[test]
    fn test_from_def() {
        let def = PropertyDef {
            name: "id".to_string(),
            ty: "number".to_string(),
            can_clone: false,
            track: true,
            ..PropertyDef::default()
        };
        let p = Property::from(&def);
        assert_eq!(p.name(), "id");
        assert!(!p.is_cloneable());
        assert!(p.is_exportable());
        assert!(p.is_tracked());
        assert!(p.uses_accessors());
    }
}
