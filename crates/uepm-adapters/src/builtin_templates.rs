//! Templates compiled into the binary.
//!
//! Placeholders use the `{{VARIABLE}}` syntax understood by
//! [`RenderContext::render`](uepm_core::domain::RenderContext::render).
//! The target-rules template additionally expects `TARGET_NAME` and
//! `TARGET_TYPE`, which the renderer sets per target.

use std::path::PathBuf;

use uepm_core::domain::{LauncherKind, ProjectLayout};

pub const PROJECT_DESCRIPTOR: &str = r#"{
	"FileVersion": 3,
	"EngineAssociation": "{{ENGINE_ASSOCIATION}}",
	"Category": "",
	"Description": "",
	"Modules": [
		{
			"Name": "{{MODULE_NAME}}",
			"Type": "Runtime",
			"LoadingPhase": "Default"
		}
	]
}
"#;

pub const TARGET_RULES: &str = r#"using UnrealBuildTool;
using System.Collections.Generic;

public class {{TARGET_NAME}}Target : TargetRules
{
	public {{TARGET_NAME}}Target(TargetInfo Target) : base(Target)
	{
		Type = TargetType.{{TARGET_TYPE}};
		DefaultBuildSettings = BuildSettingsVersion.Latest;
		IncludeOrderVersion = EngineIncludeOrderVersion.Latest;
		ExtraModuleNames.Add("{{MODULE_NAME}}");
	}
}
"#;

pub const MODULE_RULES: &str = r#"using UnrealBuildTool;

public class {{MODULE_NAME}} : ModuleRules
{
	public {{MODULE_NAME}}(ReadOnlyTargetRules Target) : base(Target)
	{
		PCHUsage = PCHUsageMode.UseExplicitOrSharedPCHs;

		PublicDependencyModuleNames.AddRange(new string[] { "Core", "CoreUObject", "Engine", "InputCore" });
		PrivateDependencyModuleNames.AddRange(new string[] { });
	}
}
"#;

pub const MODULE_HEADER: &str = r#"#pragma once

#include "CoreMinimal.h"
#include "Modules/ModuleManager.h"

class F{{MODULE_NAME}}Module : public IModuleInterface
{
public:
	virtual void StartupModule() override;
	virtual void ShutdownModule() override;
};
"#;

pub const MODULE_SOURCE: &str = r#"#include "{{MODULE_NAME}}.h"
#include "Log.h"

IMPLEMENT_PRIMARY_GAME_MODULE(F{{MODULE_NAME}}Module, {{MODULE_NAME}}, "{{MODULE_NAME}}");

void F{{MODULE_NAME}}Module::StartupModule()
{
	UE_LOG(Log{{MODULE_NAME}}, Log, TEXT("{{MODULE_NAME}} module started"));
}

void F{{MODULE_NAME}}Module::ShutdownModule()
{
	UE_LOG(Log{{MODULE_NAME}}, Log, TEXT("{{MODULE_NAME}} module shut down"));
}
"#;

pub const ACTOR_HEADER: &str = r#"#pragma once

#include "CoreMinimal.h"
#include "GameFramework/Actor.h"
#include "ActorTest.generated.h"

UCLASS()
class {{MODULE_API}} AActorTest : public AActor
{
	GENERATED_BODY()

public:
	AActorTest();

protected:
	virtual void BeginPlay() override;

public:
	virtual void Tick(float DeltaTime) override;
};
"#;

pub const ACTOR_SOURCE: &str = r#"#include "ActorTest.h"
#include "Log.h"

AActorTest::AActorTest()
{
	PrimaryActorTick.bCanEverTick = true;
}

void AActorTest::BeginPlay()
{
	Super::BeginPlay();
	UE_LOG(Log{{MODULE_NAME}}, Log, TEXT("ActorTest spawned in {{PROJECT_NAME}}"));
}

void AActorTest::Tick(float DeltaTime)
{
	Super::Tick(DeltaTime);
}
"#;

pub const LOG_HEADER: &str = r#"#pragma once

#include "CoreMinimal.h"

DECLARE_LOG_CATEGORY_EXTERN(Log{{MODULE_NAME}}, Log, All);
"#;

pub const LOG_SOURCE: &str = r#"#include "Log.h"

DEFINE_LOG_CATEGORY(Log{{MODULE_NAME}});
"#;

pub const ENGINE_INI: &str = r#"[/Script/EngineSettings.GameMapsSettings]
GameDefaultMap=/Engine/Maps/Templates/OpenWorld
EditorStartupMap=/Engine/Maps/Templates/OpenWorld

[/Script/Engine.Engine]
+ActiveGameNameRedirects=(OldGameName="TP_Blank",NewGameName="/Script/{{MODULE_NAME}}")
+ActiveGameNameRedirects=(OldGameName="/Script/TP_Blank",NewGameName="/Script/{{MODULE_NAME}}")

[/Script/Engine.RendererSettings]
r.DefaultFeature.AutoExposure=False
"#;

pub const BUILD_LAUNCHER: &str = r#"@echo off
rem Build the {{PROJECT_NAME}} editor binaries.
set PROJECT=%~dp0{{PROJECT_NAME}}.uproject
call "{{ENGINE_PATH}}\Engine\Build\BatchFiles\Build.bat" {{PROJECT_NAME}}Editor Win64 Development -Project="%PROJECT%" -WaitMutex -FromMsBuild
exit /b %ERRORLEVEL%
"#;

pub const COMPILE_LAUNCHER: &str = r#"@echo off
rem Compile the standalone {{PROJECT_NAME}} game into Binaries\Win64.
set PROJECT=%~dp0{{PROJECT_NAME}}.uproject
call "{{ENGINE_PATH}}\Engine\Build\BatchFiles\Build.bat" {{PROJECT_NAME}} Win64 Development -Project="%PROJECT%" -WaitMutex -FromMsBuild
exit /b %ERRORLEVEL%
"#;

pub const COOK_LAUNCHER: &str = r#"@echo off
rem Cook and package {{PROJECT_NAME}} content.
set PROJECT=%~dp0{{PROJECT_NAME}}.uproject
call "{{ENGINE_PATH}}\Engine\Build\BatchFiles\RunUAT.bat" BuildCookRun -project="%PROJECT%" -noP4 -platform=Win64 -clientconfig=Development -cook -allmaps -build -stage -pak -archive -archivedirectory="%~dp0Saved\StagedBuilds"
exit /b %ERRORLEVEL%
"#;

pub const EDITOR_LAUNCHER: &str = r#"@echo off
rem Open {{PROJECT_NAME}} in the editor.
set PROJECT=%~dp0{{PROJECT_NAME}}.uproject
start "" "{{ENGINE_PATH}}\Engine\Binaries\Win64\{{EDITOR_BINARY}}.exe" "%PROJECT%"
"#;

pub fn launcher(kind: LauncherKind) -> &'static str {
    match kind {
        LauncherKind::Build => BUILD_LAUNCHER,
        LauncherKind::Compile => COMPILE_LAUNCHER,
        LauncherKind::Cook => COOK_LAUNCHER,
        LauncherKind::Editor => EDITOR_LAUNCHER,
    }
}

/// Every non-launcher file except the target rules, with its template.
pub fn source_files(layout: &ProjectLayout) -> Vec<(PathBuf, &'static str)> {
    vec![
        (layout.descriptor(), PROJECT_DESCRIPTOR),
        (layout.module_rules(), MODULE_RULES),
        (layout.module_header(), MODULE_HEADER),
        (layout.module_source(), MODULE_SOURCE),
        (layout.actor_header(), ACTOR_HEADER),
        (layout.actor_source(), ACTOR_SOURCE),
        (layout.log_header(), LOG_HEADER),
        (layout.log_source(), LOG_SOURCE),
        (layout.engine_ini(), ENGINE_INI),
    ]
}
