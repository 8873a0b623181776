//! The `/vc` slash command.
//!
//! Sub-commands:
//! - `/vc create [channel_name]` - Creates a base channel
//! - `/vc help` - Usage and the guild's current settings
//! - `/vc log_channel <channel>` - Sets the audit log channel
//! - `/vc setting channel_name <base_channel> <template>` - Sets a base channel's clone template
//! - `/vc setting max_channels <limit>` - Sets the generated channel limit
//! - `/vc setting delete_delay <seconds>` - Sets the empty channel delete delay
//!
//! Every reply is ephemeral.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelType, CommandDataOption, CommandDataOptionValue, CommandInteraction,
    CommandOptionType, Context, CreateCommand, CreateCommandOption, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage, User,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::{voice_channel::CreateBaseChannelParam, voice_settings::GuildVoiceSettings},
    service::{voice_lifecycle::VoiceLifecycleService, voice_settings::VoiceSettingsService},
};

pub const NAME: &str = "vc";

const HELP_COLOR: u32 = 0xBEBEFE;

/// A parsed `/vc` invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum VcCommand {
    Create { channel_name: Option<String> },
    Help,
    LogChannel { channel_id: u64 },
    SetChannelName { base_channel_id: u64, template: String },
    SetMaxChannels { limit: i64 },
    SetDeleteDelay { seconds: i64 },
}

impl VcCommand {
    /// Parses the options of a `/vc` interaction.
    ///
    /// Returns `None` for sub-commands that are not registered or are missing a
    /// required option.
    pub fn parse(options: &[CommandDataOption]) -> Option<Self> {
        let option = options.first()?;

        match (option.name.as_str(), &option.value) {
            ("create", CommandDataOptionValue::SubCommand(args)) => Some(Self::Create {
                channel_name: string_arg(args, "channel_name"),
            }),
            ("help", CommandDataOptionValue::SubCommand(_)) => Some(Self::Help),
            ("log_channel", CommandDataOptionValue::SubCommand(args)) => Some(Self::LogChannel {
                channel_id: channel_arg(args, "channel")?,
            }),
            ("setting", CommandDataOptionValue::SubCommandGroup(subcommands)) => {
                let setting = subcommands.first()?;
                let CommandDataOptionValue::SubCommand(args) = &setting.value else {
                    return None;
                };

                match setting.name.as_str() {
                    "channel_name" => Some(Self::SetChannelName {
                        base_channel_id: channel_arg(args, "base_channel")?,
                        template: string_arg(args, "template")?,
                    }),
                    "max_channels" => Some(Self::SetMaxChannels {
                        limit: integer_arg(args, "limit")?,
                    }),
                    "delete_delay" => Some(Self::SetDeleteDelay {
                        seconds: integer_arg(args, "seconds")?,
                    }),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

fn find_arg<'a>(args: &'a [CommandDataOption], name: &str) -> Option<&'a CommandDataOptionValue> {
    args.iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}

fn string_arg(args: &[CommandDataOption], name: &str) -> Option<String> {
    match find_arg(args, name)? {
        CommandDataOptionValue::String(value) => Some(value.clone()),
        _ => None,
    }
}

fn integer_arg(args: &[CommandDataOption], name: &str) -> Option<i64> {
    match find_arg(args, name)? {
        CommandDataOptionValue::Integer(value) => Some(*value),
        _ => None,
    }
}

fn channel_arg(args: &[CommandDataOption], name: &str) -> Option<u64> {
    match find_arg(args, name)? {
        CommandDataOptionValue::Channel(channel_id) => Some(channel_id.get()),
        _ => None,
    }
}

/// Builds the `/vc` command for registration.
pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Create and manage dynamic voice channels")
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "create", "Create a base voice channel")
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "channel_name",
                        "Name of the channel (the server template is used when omitted)",
                    )
                    .required(false),
                ),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "help",
            "Show how the voice channel feature works",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "log_channel",
                "Set the channel that receives voice channel logs",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::Channel, "channel", "Text channel for logs")
                    .channel_types(vec![ChannelType::Text])
                    .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommandGroup,
                "setting",
                "Configure voice channels",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::SubCommand,
                    "channel_name",
                    "Set the name template of channels cloned from a base channel",
                )
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::Channel,
                        "base_channel",
                        "A base channel created with /vc create",
                    )
                    .channel_types(vec![ChannelType::Voice])
                    .required(true),
                )
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "template",
                        "{user_name} and {count} are replaced",
                    )
                    .required(true),
                ),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::SubCommand,
                    "max_channels",
                    "Set how many generated channels may exist at once",
                )
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::Integer, "limit", "1 to 500")
                        .min_int_value(1)
                        .max_int_value(500)
                        .required(true),
                ),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::SubCommand,
                    "delete_delay",
                    "Set how long an empty generated channel is kept",
                )
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::Integer, "seconds", "5 to 3600")
                        .min_int_value(5)
                        .max_int_value(3600)
                        .required(true),
                ),
            ),
        )
}

/// Runs a `/vc` interaction and sends the ephemeral reply.
///
/// Failures of the command itself become the reply text; only a failure to
/// respond is returned.
///
/// # Arguments
/// - `db` - Database connection for settings
/// - `voice` - Lifecycle service, `None` until the bot is ready
/// - `ctx` - Discord context used to respond
/// - `command` - The invoked command
pub async fn run(
    db: &DatabaseConnection,
    voice: Option<&VoiceLifecycleService>,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return reply(ctx, command, text("Please run this command in a server.")).await;
    };

    let Some(parsed) = VcCommand::parse(&command.data.options) else {
        tracing::warn!("Unrecognized /vc options: {:?}", command.data.options);
        return reply(ctx, command, text("Unknown /vc command.")).await;
    };

    let response = match execute(db, voice, guild_id.get(), &command.user, parsed).await {
        Ok(response) => response,
        Err(e) => {
            match &e {
                AppError::VoiceErr(_) => tracing::debug!("/vc rejected in guild {}: {}", guild_id, e),
                _ => tracing::error!("Failed to run /vc in guild {}: {:?}", guild_id, e),
            }
            text(e.user_message())
        }
    };

    reply(ctx, command, response).await
}

async fn execute(
    db: &DatabaseConnection,
    voice: Option<&VoiceLifecycleService>,
    guild_id: u64,
    user: &User,
    command: VcCommand,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let settings = VoiceSettingsService::new(db);

    match command {
        VcCommand::Create { channel_name } => {
            let voice = voice.ok_or(InternalError::VoiceNotReady)?;
            let base = voice
                .create_base_channel(CreateBaseChannelParam {
                    guild_id,
                    member_id: user.id.get(),
                    member_name: user.name.clone(),
                    channel_name,
                })
                .await?;

            Ok(text(format!(
                "Created base channel <#{}>. Joining it creates a personal copy and moves you in.",
                base.channel_id
            )))
        }
        VcCommand::Help => {
            let summary = match settings.get(guild_id).await {
                Ok(current) => Some(current),
                Err(e) => {
                    tracing::warn!("Failed to load settings of guild {} for help: {:?}", guild_id, e);
                    None
                }
            };

            Ok(CreateInteractionResponseMessage::new().embed(help_embed(summary.as_ref())))
        }
        VcCommand::LogChannel { channel_id } => {
            settings.set_log_channel(guild_id, channel_id).await?;

            Ok(text(format!("Log channel set to <#{}>.", channel_id)))
        }
        VcCommand::SetChannelName {
            base_channel_id,
            template,
        } => {
            let template = settings
                .set_base_template(guild_id, base_channel_id, &template)
                .await?;

            Ok(text(format!(
                "Updated the name template of <#{}>: `{}`",
                base_channel_id, template
            )))
        }
        VcCommand::SetMaxChannels { limit } => {
            let updated = settings.set_max_channels(guild_id, limit).await?;

            Ok(text(format!("Max channels set to {}.", updated.max_channels)))
        }
        VcCommand::SetDeleteDelay { seconds } => {
            let updated = settings.set_delete_delay(guild_id, seconds).await?;

            Ok(text(format!(
                "Delete delay set to {} seconds.",
                updated.delete_delay_seconds
            )))
        }
    }
}

/// Usage embed, with a summary of the current settings when available.
pub fn help_embed(settings: Option<&GuildVoiceSettings>) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("/vc commands")
        .color(HELP_COLOR)
        .field(
            "/vc create [channel_name]",
            "Creates a base channel. Joining it creates a channel with the same settings and moves you there.",
            false,
        )
        .field(
            "/vc setting channel_name <base_channel> <template>",
            "Sets the name template of a base channel created with /vc create ({user_name}, {count}).",
            false,
        )
        .field(
            "/vc setting max_channels <limit>",
            "How many generated channels may exist at once (default 50).",
            false,
        )
        .field(
            "/vc setting delete_delay <seconds>",
            "Seconds an empty generated channel is kept before deletion (default 30).",
            false,
        )
        .field(
            "/vc log_channel <channel>",
            "Text channel that receives voice channel logs (optional).",
            false,
        );

    if let Some(settings) = settings {
        let summary = format!(
            "Template: `{}`\nLimit: {}\nDelete delay: {} seconds\nLog channel: {}",
            settings.base_name_template,
            settings.max_channels,
            settings.delete_delay_seconds,
            match settings.log_channel_id {
                Some(channel_id) => format!("<#{}>", channel_id),
                None => "not set".to_string(),
            }
        );
        embed = embed.field("Current settings", summary, false);
    }

    embed
}

fn text(content: impl Into<String>) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new().content(content)
}

async fn reply(
    ctx: &Context,
    command: &CommandInteraction,
    message: CreateInteractionResponseMessage,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(message.ephemeral(true)),
        )
        .await?;

    Ok(())
}
