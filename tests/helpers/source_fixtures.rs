//! Common declaration documents for tests.

// Dependency scenarios
pub const TWO_INTERFACES: &str = r#"interface A { b: B }
interface B { value: string }
"#;

pub const UNION_ALIAS: &str = r#"type C = D | E
interface D { d: number }
interface E { e: boolean }
"#;

pub const ARRAY_OF_BUILTIN: &str = r#"interface F { g: string[] }
"#;

pub const EXTERNAL_BASE: &str = r#"interface G extends H {
  own: number
}
"#;

pub const BUILTIN_NAMES_AS_TYPES: &str = r#"interface Holder {
  a: string
  b: Number
  c: Boolean[]
  d: Promise<Date>
  e: Array<String>
  f: Payload
}
interface Payload {}
"#;

pub const SELF_REFERENCE: &str = r#"export namespace Prisma {
  export type TreeNode = {
    parent: Prisma.TreeNode | null
    children: TreeNode[]
  }
}
"#;

/// Trimmed-down shape of a generated database client declaration file
pub const GENERATED_CLIENT: &str = r#"
/**
 * Client
**/

import * as runtime from '@prisma/client/runtime/library';
import $Types = runtime.Types // general types
import $Public = runtime.Types.Public
import $Utils = runtime.Types.Utils
import $Extensions = runtime.Types.Extensions
import $Result = runtime.Types.Result

export type PrismaPromise<T> = $Public.PrismaPromise<T>

/**
 * Model User
 *
 */
export type User = $Result.DefaultSelection<Prisma.$UserPayload>

export class PrismaClient<
  ClientOptions extends Prisma.PrismaClientOptions = Prisma.PrismaClientOptions,
  U = 'log' extends keyof ClientOptions ? ClientOptions['log'] extends Array<Prisma.LogLevel | Prisma.LogDefinition> ? Prisma.GetEvents<ClientOptions['log']> : never : never,
  ExtArgs extends $Extensions.InternalArgs = $Extensions.DefaultArgs
> {
  [K: symbol]: { types: Prisma.TypeMap<ExtArgs>['other'] }

  constructor(optionsArg ?: Prisma.Subset<ClientOptions, Prisma.PrismaClientOptions>);
  $on<V extends U>(eventType: V, callback: (event: V extends 'query' ? Prisma.QueryEvent : Prisma.LogEvent) => void): void;
  $connect(): $Utils.JsPromise<void>;
  get user(): Prisma.UserDelegate<ExtArgs, ClientOptions>;
}

export namespace Prisma {
  export import DMMF = runtime.DMMF

  export type PrismaPromise<T> = $Public.PrismaPromise<T>

  export const prismaVersion: PrismaVersion

  export type PrismaVersion = {
    client: string
  }

  /**
   * Log levels
   */
  export type LogLevel = 'info' | 'query' | 'warn' | 'error'
  export type LogDefinition = {
    level: LogLevel
    emit: 'stdout' | 'event'
  }

  export interface PrismaClientOptions {
    datasourceUrl?: string
    log?: (LogLevel | LogDefinition)[]
  }

  export type GetEvents<T extends any[]> = T extends Array<LogLevel | LogDefinition> ? GetLogType<T[0]> : never
  export type GetLogType<T extends LogLevel | LogDefinition> = T extends LogDefinition ? T['emit'] extends 'event' ? T['level'] : never : never

  export type QueryEvent = {
    timestamp: Date
    query: string
    duration: number
  }

  export type LogEvent = {
    timestamp: Date
    message: string
  }

  export const ModelName: {
    User: 'User',
    Post: 'Post'
  };

  export type ModelName = (typeof ModelName)[keyof typeof ModelName]

  export type AtLeast<O extends object, K extends string> = NoExpand<
    O extends unknown
    ? | (K extends keyof O ? { [P in K]: O[P] } & O : O)
      | {[P in keyof O as P extends K ? P : never]-?: O[P]} & O
    : never>;

  export type Subset<T, U> = {
    [key in keyof T]: key extends keyof U ? T[key] : never;
  };

  export type $UserPayload<ExtArgs extends $Extensions.InternalArgs = $Extensions.DefaultArgs> = {
    name: "User"
    objects: {
      posts: Prisma.$PostPayload<ExtArgs>[]
    }
    scalars: $Extensions.GetPayloadResult<{
      id: number
      email: string
    }, ExtArgs["result"]["user"]>
    composites: {}
  }

  export type $PostPayload<ExtArgs extends $Extensions.InternalArgs = $Extensions.DefaultArgs> = {
    name: "Post"
    objects: {
      author: Prisma.$UserPayload<ExtArgs>
    }
    scalars: $Extensions.GetPayloadResult<{
      id: number
      authorId: number
      data: JsonValue | null
    }, ExtArgs["result"]["post"]>
    composites: {}
  }

  export type JsonValue = runtime.JsonValue

  export type UserWhereUniqueInput = Prisma.AtLeast<{
    id?: number
    email?: string
    AND?: UserWhereInput | UserWhereInput[]
  }, "id" | "email">

  export type UserWhereInput = {
    AND?: UserWhereInput | UserWhereInput[]
    email?: StringFilter<"User"> | string
  }

  export type UserFindUniqueArgs<ExtArgs extends $Extensions.InternalArgs = $Extensions.DefaultArgs> = {
    where: UserWhereUniqueInput
  }

  export interface UserDelegate<ExtArgs extends $Extensions.InternalArgs = $Extensions.DefaultArgs, ClientOptions = {}> {
    findUnique<T extends UserFindUniqueArgs>(args: Subset<T, UserFindUniqueArgs<ExtArgs>>): Prisma__UserClient<$Result.GetResult<Prisma.$UserPayload<ExtArgs>, T, "findUnique", ClientOptions> | null, null, ExtArgs, ClientOptions>
  }

  export interface Prisma__UserClient<T, Null = never, ExtArgs extends $Extensions.InternalArgs = $Extensions.DefaultArgs, ClientOptions = {}> extends Prisma.PrismaPromise<T> {
    readonly [Symbol.toStringTag]: "PrismaPromise"
    then<TResult1 = T, TResult2 = never>(onfulfilled?: ((value: T) => TResult1 | PromiseLike<TResult1>) | undefined | null, onrejected?: ((reason: any) => TResult2 | PromiseLike<TResult2>) | undefined | null): $Utils.JsPromise<TResult1 | TResult2>
  }
}
"#;

/// Construct names of [`GENERATED_CLIENT`] in document order
pub const GENERATED_CLIENT_NAMES: &[&str] = &[
    "PrismaPromise",
    "PrismaVersion",
    "LogLevel",
    "LogDefinition",
    "PrismaClientOptions",
    "GetEvents",
    "GetLogType",
    "QueryEvent",
    "LogEvent",
    "ModelName",
    "AtLeast",
    "Subset",
    "$UserPayload",
    "$PostPayload",
    "JsonValue",
    "UserWhereUniqueInput",
    "UserWhereInput",
    "UserFindUniqueArgs",
    "UserDelegate",
    "Prisma__UserClient",
];
