//! Event types that get `next_*` accessors in `nextevent.rs`.
//!
//! This file is only parsed, never compiled. Add a declaration here and
//! rerun `nextevent` from the crate root to regenerate the accessors.

struct ChannelCreate;
struct ChannelDelete;
struct ChannelPinsUpdate;
struct ChannelUpdate;
struct Connect;
struct Disconnect;
struct Event;
struct GuildBanAdd;
struct GuildBanRemove;
struct GuildCreate;
struct GuildDelete;
struct GuildEmojisUpdate;
struct GuildIntegrationsUpdate;
struct GuildMemberAdd;
struct GuildMemberRemove;
struct GuildMemberUpdate;
struct GuildMembersChunk;
struct GuildRoleCreate;
struct GuildRoleDelete;
struct GuildRoleUpdate;
struct GuildUpdate;
struct MessageAck;
struct MessageCreate;
struct MessageDelete;
struct MessageDeleteBulk;
struct MessageReactionAdd;
struct MessageReactionRemove;
struct MessageUpdate;
struct PresenceUpdate;
struct PresencesReplace;
struct RateLimit;
struct Ready;
struct RelationshipAdd;
struct RelationshipRemove;
struct Resumed;
struct TypingStart;
struct UserGuildSettingsUpdate;
struct UserSettingsUpdate;
struct UserUpdate;
struct VoiceServerUpdate;
struct VoiceStateUpdate;
