//! Snapshot tests for TypeScript model generation.
//!
//! These tests verify that the generated TypeScript matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use modelgen_manifest::Definition;
use modelgen_typescript::{Generated, Generator};

fn generate_json(json: &str) -> Generated {
    let def = Definition::from_str(json).expect("Failed to parse definition");
    Generator::from(&def).generate()
}

fn generate_toml(toml: &str) -> Generated {
    let def = Definition::from_toml_str(toml).expect("Failed to parse definition");
    Generator::from(&def).generate()
}

const MODELS: &str = r#"{
    "options": { "className": "_type" },
    "enums": [
        { "name": "Role", "names": ["Admin", "Guest"], "values": ["'admin'", "'guest'"] }
    ],
    "interfaces": [
        {
            "name": "Named",
            "import": [{ "name": "Entity", "path": "./entity" }],
            "properties": [{ "name": "name", "type": "string" }]
        }
    ],
    "classes": [
        {
            "name": "Model",
            "isBaseClass": true,
            "isBaseModel": true,
            "canClone": true,
            "canExport": true,
            "import": [{ "name": "Utils", "path": "./utils" }],
            "properties": [{ "name": "id", "type": "number", "value": 0 }]
        },
        {
            "name": "User",
            "extends": "Model",
            "implements": ["Named"],
            "import": [{ "name": "Named", "path": "./entity" }],
            "args": [{ "name": "data", "optional": true }],
            "superArgs": [{ "name": "data" }],
            "properties": [
                { "name": "name", "type": "string", "track": true },
                {
                    "name": "password",
                    "type": "string",
                    "modifier": "private",
                    "canClone": false,
                    "canExport": false
                }
            ],
            "methods": [
                { "name": "greet", "type": "string", "body": "return `Hi ${this.name}`;" }
            ]
        }
    ]
}"#;

#[test]
fn test_models_manifest() {
    let generated = generate_json(MODELS);
    assert_eq!(generated.enums, ["Role"]);
    assert_eq!(generated.interfaces, ["Named"]);
    assert_eq!(generated.classes, ["User"]);
}

#[test]
fn test_models_pretty() {
    let generated = generate_json(MODELS);
    insta::assert_snapshot!(generated.output, @r"
    import { Entity, Named } from './entity';
    import { Utils } from './utils';
    export enum Role {
        Admin = 'admin',
        Guest = 'guest'
    }
    export interface Named {
        name: string;
    }
    export class Model {
        public id: number = 0;
        protected _clones: string[] = [ 'id' ];
        protected _exports: string[] = [ 'id' ];
        public registerProperty(name: string, canClone: boolean = true, canExport: boolean = true, canUndo: boolean = true): void {
            if (canClone) { this._clones.push(name); } if (canExport) { this._exports.push(name); } if (canUndo) { this.__[name] = this[name]; }
        }
        public registerProperties(properties: any[]): void {
            properties.forEach((p) => { if (!this.isNullOrUndefined(p) && !this.isNullOrEmpty(p.name)) { const n = p.name; const c = this.isNullOrUndefined(p.canClone) ? true : p.canClone; const e = this.isNullOrUndefined(p.canExport) ? true : p.canExport; const u = this.isNullOrUndefined(p.canUndo) ? true : p.canUndo; this.registerProperty(n, c, e, u); } });
        }
        public clone(obj?: any): any {
            const o = obj || {}; if (this._clones !== undefined) { this._clones.forEach((k) => { o[k] = this[k]; }); } return o;
        }
        public toObject(): any {
            const o = {}; this._exports.forEach((e) => { if (this[e] !== undefined) { if (this[e]['toObject'] !== undefined) { o[e] = this[e].toObject(); } else { o[e] = this[e]; } } }); return o;
        }
        public parseObject(data: any): void {
            if (!this.isNullOrUndefined(data)) { Utils.parseObject(data, this); }
        }
    }
    export class User extends Model implements Named {
        private _name: string;
        public get name(): string {
            return this._name;
        }
        public set name(value: string) {
            this._name = value;
            this._isDirty = true;
            this._lastUpdated = (new Date()).getTime();
        }
        private password: string;
        constructor(data?: any) {
            super(data);
            this._type = 'User';
            this._clones = [ ...this._clones, 'name' ];
            this._exports = [ ...this._exports, 'name' ];
        }
        public greet(): string {
            return `Hi ${this.name}`;
        }
    }
    ");
}

#[test]
fn test_abstract_undoable_compact() {
    let generated = generate_toml(
        r#"
        [options]
        prettify = false

        [[classes]]
        name = "Document"
        extends = "Record"
        isAbstract = true
        canUndo = true
        constructorCode = "this.init();"

        [classes.decorator]
        type = "Entity"
        options = [{ name = "table", value = "'docs'" }]

        [[classes.properties]]
        name = "count"
        type = "number"
        static = true
        value = 0
        canUndo = false

        [[classes.properties]]
        name = "title"
        type = "string"

        [[classes.methods]]
        name = "validate"
        type = "boolean"
        isAbstract = true
        body = "return true;"
        "#,
    );
    insta::assert_snapshot!(
        generated.output,
        @"@Entity({table:'docs'}) export abstract class Document extends Record{public static count:number=0;public title:string;constructor(){super();this.init();}abstract public validate():boolean;}"
    );
}

#[test]
fn test_blank_entities_are_dropped() {
    let generated = generate_json(
        r#"{
            "options": { "prettify": false },
            "enums": [{ "name": "" , "names": ["A"] }],
            "interfaces": [{ "properties": [{ "name": "x" }] }],
            "classes": [
                { "name": "Kept", "properties": [{ "name": "" }, { "name": "a" }] },
                { "name": "  " }
            ]
        }"#,
    );
    assert!(generated.enums.is_empty());
    assert!(generated.interfaces.is_empty());
    assert_eq!(generated.classes, ["Kept"]);
    insta::assert_snapshot!(generated.output, @"export class Kept{public a:any;}");
}

/// Values are pasted verbatim: a bare string value where TypeScript expects
/// a literal produces malformed output rather than an error.
#[test]
fn test_unvalidated_values_pass_through() {
    let generated = generate_json(
        r#"{
            "options": { "prettify": false },
            "enums": [{ "name": "Mode", "names": ["Fast", "Slow"], "values": [1, "slow"] }],
            "classes": [{ "name": "C", "properties": [{ "name": "on", "type": "boolean", "value": true }] }]
        }"#,
    );
    insta::assert_snapshot!(
        generated.output,
        @"export enum Mode{Fast=1,Slow=slow}export class C{public on:boolean=true;}"
    );
}

#[test]
fn test_free_text_modifiers() {
    let generated = generate_json(
        r#"{
            "options": { "prettify": false },
            "classes": [{
                "name": "C",
                "properties": [{ "name": "id", "modifier": "public readonly" }],
                "methods": [{ "name": "load", "modifier": "async" }]
            }]
        }"#,
    );
    insta::assert_snapshot!(
        generated.output,
        @"export class C{public readonly id:any;async load():void{return;}}"
    );
}

/// Integers beyond the signed range keep every digit.
#[test]
fn test_large_integer_value_is_exact() {
    let generated = generate_json(
        r#"{
            "options": { "prettify": false },
            "classes": [{ "name": "C", "properties": [{ "name": "big", "type": "number", "value": 18446744073709551615 }] }]
        }"#,
    );
    insta::assert_snapshot!(
        generated.output,
        @"export class C{public big:number=18446744073709551615;}"
    );
}

/// A nested list given the wrong shape is rejected when the definition is
/// read; nothing is rendered.
#[test]
fn test_wrong_shape_is_a_parse_error() {
    let err = Definition::from_str(r#"{ "enums": [{ "name": "E", "names": "A" }] }"#).unwrap_err();
    assert!(matches!(*err, modelgen_manifest::Error::ParseJson { .. }));

    let err = Definition::from_str(r#"{ "classes": { "name": "C" } }"#).unwrap_err();
    assert!(matches!(*err, modelgen_manifest::Error::ParseJson { .. }));
}

#[test]
fn test_json_and_toml_agree() {
    let json = generate_json(
        r#"{
            "interfaces": [{
                "name": "Point",
                "properties": [{ "name": "x", "type": "number" }, { "name": "y", "type": "number", "optional": true }],
                "methods": [{ "name": "norm", "type": "number" }]
            }]
        }"#,
    );
    let toml = generate_toml(
        r#"
        [[interfaces]]
        name = "Point"
        properties = [
            { name = "x", type = "number" },
            { name = "y", type = "number", optional = true },
        ]
        methods = [{ name = "norm", type = "number" }]
        "#,
    );
    assert_eq!(json, toml);
    insta::assert_snapshot!(toml.output, @r"
    export interface Point {
        x: number;
        y?: number;
        norm(): number;
    }
    ");
}
